//! Drawing the table view into a buffer.
//!
//! Every clickable element registers its region in the app's hit map as it
//! is drawn, so the next click resolves against the frame the user saw.

use datatable_lib::engine::{Header, TableEngine};
use datatable_lib::model::TableRow;

use crate::app::{App, Focus, PageButton, Target};
use crate::term::text::{display_width, truncate_to_width};
use crate::term::{Buffer, Rect, Style, TextInput};

const MARGIN: u16 = 1;
const COLUMN_GAP: u16 = 2;
const MIN_COLUMN_WIDTH: u16 = 3;

impl<E: TableEngine> App<E> {
    pub(crate) fn render(&mut self, buf: &mut Buffer) {
        self.hits.clear();
        buf.fill(Rect::new(0, 0, buf.width(), buf.height()), self.theme.base());

        let width = buf.width().saturating_sub(MARGIN * 2);
        let mut y = 0;

        buf.put_str(MARGIN, y, &self.title, width, self.theme.title());
        y += 2;

        self.render_filter(buf, Rect::line(MARGIN, y, width));
        y += 2;

        y = self.render_table(buf, MARGIN, y, width);
        y += 1;

        self.render_status(buf, Rect::line(MARGIN, y, width));
        y += 1;

        self.render_buttons(buf, Rect::line(MARGIN, y, width));
        y += 2;

        buf.put_str(MARGIN, y, self.help(), width, self.theme.muted());
    }

    fn render_filter(&mut self, buf: &mut Buffer, area: Rect) {
        let focused = self.focus == Focus::Filter;
        let style = self.theme.input(focused);
        buf.fill(area, style);
        if self.filter.text().is_empty() && !focused {
            let room = area.width.saturating_sub(2);
            buf.put_str(area.x + 1, area.y, "Search", room, self.theme.muted());
        } else {
            let cursor = focused.then(|| self.theme.cursor());
            put_input(buf, area, &self.filter, style, cursor);
        }
        self.hits.push(area, Target::Filter);
    }

    /// Draw header and body rows. Returns the row below the table.
    fn render_table(&mut self, buf: &mut Buffer, x: u16, mut y: u16, width: u16) -> u16 {
        let headers = self
            .engine
            .header_groups()
            .into_iter()
            .next()
            .map(|group| group.headers)
            .unwrap_or_default();
        let multi = self.engine.sorting().len() > 1;
        let labels: Vec<String> = headers.iter().map(|h| header_label(h, multi)).collect();
        let cells: Vec<Vec<String>> = self
            .engine
            .rows()
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|h| row.value(&h.column_id).to_string())
                    .collect()
            })
            .collect();
        let widths = column_widths(&labels, &cells, width);

        // Header
        let mut cx = x;
        for (index, (header, label)) in headers.iter().zip(&labels).enumerate() {
            let style = if header.sortable {
                self.theme.header()
            } else {
                self.theme.muted().bold()
            };
            let w = widths[index];
            buf.put_str(cx, y, &truncate_to_width(label, w as usize), w, style);
            self.hits.push(Rect::line(cx, y, w), Target::Header(index));
            cx += w + COLUMN_GAP;
        }
        y += 1;
        let rule = "─".repeat(width as usize);
        buf.put_str(x, y, &rule, width, self.theme.muted());
        y += 1;

        // Body
        let keys: Vec<_> = self.engine.rows().iter().map(|row| row.key()).collect();
        for (row, (key, values)) in keys.iter().zip(&cells).enumerate() {
            let mut cx = x;
            for (column, (header, text)) in headers.iter().zip(values).enumerate() {
                let w = widths[column];
                let area = Rect::line(cx, y, w);
                self.hits.push(area, Target::Cell { row, column });
                if self.edits.is_editing(key, &header.column_id) {
                    let style = self.theme.editor();
                    // The editor may spill into the column gap.
                    let room = (x + width).saturating_sub(cx);
                    let area = Rect::line(cx, y, (w + COLUMN_GAP - 1).min(room));
                    buf.fill(area, style);
                    put_input(buf, area, &self.editor, style, Some(self.theme.cursor()));
                    self.hits.push(area, Target::Editor);
                } else {
                    let text = truncate_to_width(text, w as usize);
                    buf.put_str(cx, y, &text, w, Style::fg(self.theme.text));
                }
                cx += w + COLUMN_GAP;
            }
            y += 1;
        }
        if cells.is_empty() {
            buf.put_str(x, y, "No matching rows", width, self.theme.muted());
            y += 1;
        }
        y
    }

    fn render_status(&mut self, buf: &mut Buffer, area: Rect) {
        let status = format!(
            "Page {} of {} · {} rows",
            self.engine.page_index() + 1,
            self.engine.page_count(),
            self.engine.filtered_row_count()
        );
        let used = buf.put_str(area.x, area.y, &status, area.width, self.theme.muted());
        if let Some(notice) = &self.notice {
            let x = area.x + used + 2;
            let room = area.right().saturating_sub(x);
            buf.put_str(x, area.y, notice, room, self.theme.notice());
        }
    }

    fn render_buttons(&mut self, buf: &mut Buffer, area: Rect) {
        let mut x = area.x;
        for button in PageButton::ALL {
            let text = format!(" {} ", button.label());
            let room = area.right().saturating_sub(x);
            let style = self.theme.button(self.can_page(button));
            let used = buf.put_str(x, area.y, &text, room, style);
            self.hits.push(Rect::line(x, area.y, used), Target::Page(button));
            x = x.saturating_add(used + 1);
        }
    }

    fn help(&self) -> &'static str {
        if self.edits.is_active() {
            "Enter commit · Esc cancel · click elsewhere to commit"
        } else if self.focus == Focus::Filter {
            "Type to filter · Esc/Tab/Enter done"
        } else {
            "/ search · click header to sort (shift: multi) · click cell to edit · PgUp/PgDn page · q quit"
        }
    }
}

fn header_label(header: &Header, multi: bool) -> String {
    match (header.sort, header.sort_index) {
        (Some(direction), Some(index)) if multi => {
            format!("{} {}{}", header.label, direction.marker(), index + 1)
        }
        (Some(direction), _) => format!("{} {}", header.label, direction.marker()),
        _ => header.label.clone(),
    }
}

/// Natural column widths, scaled down to fit when the table is too wide.
fn column_widths(labels: &[String], cells: &[Vec<String>], available: u16) -> Vec<u16> {
    // Room for a sort marker keeps headers from jumping when toggled.
    let mut widths: Vec<usize> = labels.iter().map(|l| display_width(l) + 3).collect();
    for row in cells {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(text));
        }
    }

    let gaps = COLUMN_GAP as usize * widths.len().saturating_sub(1);
    let natural: usize = widths.iter().sum();
    let room = (available as usize).saturating_sub(gaps);
    if natural > room && natural > 0 {
        for width in &mut widths {
            *width = (*width * room / natural).max(MIN_COLUMN_WIDTH as usize);
        }
    }
    widths
        .into_iter()
        .map(|w| u16::try_from(w).unwrap_or(u16::MAX))
        .collect()
}

/// Draw a text input's contents, keeping the cursor in view.
fn put_input(
    buf: &mut Buffer,
    area: Rect,
    input: &TextInput,
    style: Style,
    cursor: Option<Style>,
) {
    let inner = area.width.saturating_sub(2) as usize;
    let chars: Vec<char> = input.text().chars().collect();
    let before: String = chars[..input.cursor()].iter().collect();

    // Scroll so the cursor column stays inside the input.
    let mut skip = 0;
    while skip < input.cursor()
        && display_width(&before.chars().skip(skip).collect::<String>()) >= inner
    {
        skip += 1;
    }
    let visible: String = chars[skip..].iter().collect();
    buf.put_str(area.x + 1, area.y, &visible, inner as u16, style);

    if let Some(cursor_style) = cursor {
        let offset = display_width(&chars[skip..input.cursor()].iter().collect::<String>()) as u16;
        let under = chars.get(input.cursor()).copied().unwrap_or(' ');
        let cx = area.x + 1 + offset;
        if cx < area.right() {
            buf.put_str(cx, area.y, &under.to_string(), 2, cursor_style);
        }
    }
}
