use std::io::{self, Write};

use crossterm::{
    cursor, event, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use super::text::char_width;
use super::{Buffer, Cell, Rgb, TextStyle};

/// Owns the terminal for the lifetime of the app.
///
/// Frames are drawn into a back buffer and only the cells that changed
/// since the previous frame are written out.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    /// Take over the terminal.
    ///
    /// The value exists before raw mode is enabled, so a failure partway
    /// through setup still restores the terminal on drop.
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut term = Self {
            stdout: io::stdout(),
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        };

        terminal::enable_raw_mode()?;
        queue!(
            term.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        term.stdout.flush()?;

        log::debug!("Terminal opened at {}x{}", width, height);
        Ok(term)
    }

    /// Draw one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("Terminal resized to {}x{}", width, height);
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current_buffer.clear();
        render(&mut self.current_buffer);
        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last: Option<(u16, u16)> = None;
        let mut pen = Pen::default();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // The wide char in the previous cell already covers this one
            if cell.wide_continuation {
                continue;
            }

            if last != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            pen.apply(&mut self.stdout, cell)?;
            write!(self.stdout, "{}", cell.char)?;

            last = Some((x + char_width(cell.char).max(1) as u16, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

/// Last colors and attributes sent, to skip redundant escape codes.
#[derive(Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    style: Option<TextStyle>,
}

impl Pen {
    fn apply(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if self.style != Some(cell.style) {
            // Reset drops colors too, so resend them below
            queue!(out, SetAttribute(Attribute::Reset))?;
            if cell.style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if cell.style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            if cell.style.underline {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            if cell.style.reverse {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            self.style = Some(cell.style);
            self.fg = None;
            self.bg = None;
        }
        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(rgb(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(rgb(cell.bg)))?;
            self.bg = Some(cell.bg);
        }
        Ok(())
    }
}

fn rgb(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
