use super::text::char_width;
use super::{Rect, Rgb, Style, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a wide character drawn in the previous cell.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::default(),
            wide_continuation: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[cfg(test)]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Cells that differ from `other`, with their coordinates.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Paint a rectangle with blanks in the given style.
    pub fn fill(&mut self, rect: Rect, style: Style) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.char = ' ';
                    cell.fg = style.fg;
                    if let Some(bg) = style.bg {
                        cell.bg = bg;
                    }
                    cell.style = style.text;
                    cell.wide_continuation = false;
                }
            }
        }
    }

    /// Write text starting at (x, y), using at most `max_width` columns.
    ///
    /// Returns the number of columns written. Wide characters that would
    /// straddle the limit are left out.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) -> u16 {
        let limit = x.saturating_add(max_width).min(self.width);
        let mut cx = x;
        for ch in text.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if cx + width > limit {
                break;
            }
            self.put_char(cx, y, ch, style);
            if width == 2
                && let Some(cell) = self.get_mut(cx + 1, y)
            {
                cell.wide_continuation = true;
                if let Some(bg) = style.bg {
                    cell.bg = bg;
                }
            }
            cx += width;
        }
        cx - x
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.char = ch;
            cell.fg = style.fg;
            // Preserve existing background
            if let Some(bg) = style.bg {
                cell.bg = bg;
            }
            cell.style = style.text;
            cell.wide_continuation = false;
        }
    }

    /// Text content of one row, for assertions.
    #[cfg(test)]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }
}
