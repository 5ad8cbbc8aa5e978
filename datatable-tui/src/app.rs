//! Application state and input handling.

use datatable_lib::edit::{AbandonPolicy, CellEdit, EditTracker};
use datatable_lib::engine::TableEngine;
use datatable_lib::model::TableRow;
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::term::{
    Event, HitMap, Key, Modifiers, MouseButton, Terminal, TextEditResult, TextInput,
};
use crate::theme::Theme;

pub(crate) type RowKey<E> = <<E as TableEngine>::Row as TableRow>::Key;

/// What a screen region does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Filter,
    /// Header cell, by column position.
    Header(usize),
    /// Body cell, by row position on the current page and column position.
    Cell { row: usize, column: usize },
    /// The open cell editor.
    Editor,
    Page(PageButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageButton {
    First,
    Previous,
    Next,
    Last,
}

impl PageButton {
    pub(crate) const ALL: [PageButton; 4] = [
        PageButton::First,
        PageButton::Previous,
        PageButton::Next,
        PageButton::Last,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            PageButton::First => "<<",
            PageButton::Previous => "Previous Page",
            PageButton::Next => "Next Page",
            PageButton::Last => ">>",
        }
    }
}

/// Keyboard focus outside of cell editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    None,
    Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Options taken from settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppOptions {
    pub abandon_policy: AbandonPolicy,
    pub apply_edits: bool,
}

/// The table view and its edit session.
pub struct App<E: TableEngine> {
    pub(crate) engine: E,
    pub(crate) edits: EditTracker<RowKey<E>, String>,
    committed: mpsc::UnboundedReceiver<CellEdit<RowKey<E>, String>>,
    pub(crate) filter: TextInput,
    pub(crate) editor: TextInput,
    pub(crate) focus: Focus,
    apply_edits: bool,
    pub(crate) theme: Theme,
    pub(crate) title: String,
    pub(crate) notice: Option<String>,
    pub(crate) hits: HitMap<Target>,
}

impl<E: TableEngine> App<E> {
    pub fn new(engine: E, title: impl Into<String>, options: AppOptions) -> Self {
        let (tx, committed) = mpsc::unbounded_channel();
        let edits = EditTracker::new()
            .with_abandon_policy(options.abandon_policy)
            .with_commit_handler(move |edit: &CellEdit<RowKey<E>, String>| {
                if tx.send(edit.clone()).is_err() {
                    log::warn!("Commit receiver dropped, edit to {} lost", edit.row);
                }
            });
        let filter = TextInput::new(engine.global_filter());
        Self {
            engine,
            edits,
            committed,
            filter,
            editor: TextInput::default(),
            focus: Focus::None,
            apply_edits: options.apply_edits,
            theme: Theme::default(),
            title: title.into(),
            notice: None,
            hits: HitMap::new(),
        }
    }

    pub(crate) fn handle_event(&mut self, event: Event) -> Flow {
        let flow = match event {
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
                modifiers,
            } => {
                let target = self.hits.at(x, y).copied();
                self.handle_click(target, modifiers);
                Flow::Continue
            }
            Event::Click { .. } => Flow::Continue,
            Event::Resize { width, height } => {
                log::debug!("Resized to {}x{}", width, height);
                Flow::Continue
            }
        };
        self.drain_commits();
        flow
    }

    fn handle_click(&mut self, target: Option<Target>, modifiers: Modifiers) {
        log::trace!("Click on {:?}", target);

        // Clicking anywhere but a cell blurs the editor.
        if self.edits.is_active() && !matches!(target, Some(Target::Editor | Target::Cell { .. }))
        {
            self.edits.commit_edit();
        }

        match target {
            Some(Target::Filter) => self.focus = Focus::Filter,
            Some(Target::Header(index)) => {
                self.focus = Focus::None;
                self.click_header(index, modifiers.shift || modifiers.ctrl);
            }
            Some(Target::Cell { row, column }) => {
                self.focus = Focus::None;
                self.begin_cell_edit(row, column);
            }
            Some(Target::Editor) => {}
            Some(Target::Page(button)) => {
                self.focus = Focus::None;
                self.page(button);
            }
            None => self.focus = Focus::None,
        }
    }

    fn click_header(&mut self, index: usize, multi: bool) {
        let Some(column_id) = self.engine.columns().get(index).map(|c| c.id.clone()) else {
            return;
        };
        let direction = if multi {
            self.engine.toggle_sort_multi(&column_id)
        } else {
            self.engine.toggle_sort(&column_id)
        };
        log::debug!("Sort on {} is now {:?}", column_id, direction);
    }

    fn begin_cell_edit(&mut self, row: usize, column: usize) {
        let rows = self.engine.rows();
        let record = rows.get(row).copied();
        let column_id = self.engine.columns().get(column).map(|c| c.id.clone());
        let key = record.map(TableRow::key);
        let current = match (record, &column_id) {
            (Some(record), Some(id)) => Some(record.value(id)),
            _ => None,
        };

        if self
            .edits
            .begin_edit(key, column_id, current.as_ref())
            .is_ok()
        {
            self.editor = TextInput::new(self.edits.draft().unwrap_or_default());
        }
    }

    fn page(&mut self, button: PageButton) {
        if !self.can_page(button) {
            return;
        }
        match button {
            PageButton::First => self.engine.first_page(),
            PageButton::Previous => self.engine.previous_page(),
            PageButton::Next => self.engine.next_page(),
            PageButton::Last => self.engine.last_page(),
        }
    }

    /// Whether a page button is enabled.
    pub(crate) fn can_page(&self, button: PageButton) -> bool {
        match button {
            PageButton::First | PageButton::Previous => self.engine.can_previous_page(),
            PageButton::Next | PageButton::Last => self.engine.can_next_page(),
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Flow {
        if modifiers.ctrl && matches!(key, Key::Char('q' | 'c')) {
            self.edits.commit_edit();
            return Flow::Quit;
        }

        if self.edits.is_active() {
            self.edit_key(key, modifiers);
            return Flow::Continue;
        }

        if self.focus == Focus::Filter {
            self.filter_key(key, modifiers);
            return Flow::Continue;
        }

        match key {
            Key::Char('/') => self.focus = Focus::Filter,
            Key::Char('q') => return Flow::Quit,
            Key::Home => self.page(PageButton::First),
            Key::PageUp | Key::Left => self.page(PageButton::Previous),
            Key::PageDown | Key::Right => self.page(PageButton::Next),
            Key::End => self.page(PageButton::Last),
            _ => {}
        }
        Flow::Continue
    }

    fn edit_key(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Enter | Key::Tab => {
                self.edits.commit_edit();
            }
            Key::Escape => {
                self.edits.cancel_edit();
            }
            _ => {
                if self.editor.handle_key(key, modifiers) == TextEditResult::Changed {
                    self.edits.update_draft(self.editor.text());
                }
            }
        }
    }

    fn filter_key(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Escape | Key::Tab | Key::Enter => self.focus = Focus::None,
            _ => {
                if self.filter.handle_key(key, modifiers) == TextEditResult::Changed {
                    self.engine.set_global_filter(self.filter.text());
                    log::debug!(
                        "Filter {:?} matches {} rows",
                        self.filter.text(),
                        self.engine.filtered_row_count()
                    );
                }
            }
        }
    }

    /// Handle edits the tracker has committed since the last event.
    fn drain_commits(&mut self) {
        while let Ok(edit) = self.committed.try_recv() {
            log::info!(
                "Committed {}/{}: {:?}",
                edit.row,
                edit.column,
                edit.text
            );
            if !self.apply_edits {
                continue;
            }
            match self.engine.update_cell(&edit.row, &edit.column, &edit.text) {
                Ok(()) => self.notice = None,
                Err(e) => {
                    log::warn!("Edit to {}/{} rejected: {}", edit.row, edit.column, e);
                    self.notice = Some(e.to_string());
                }
            }
        }
    }
}

/// Run the table view until the user quits.
pub async fn run<E: TableEngine>(mut app: App<E>) -> std::io::Result<()> {
    let mut terminal = Terminal::new()?;
    let mut events = crossterm::event::EventStream::new();

    terminal.draw(|buf| app.render(buf))?;

    while let Some(result) = events.next().await {
        let event = match result {
            Ok(event) => event,
            Err(e) => {
                log::error!("Event stream error: {}", e);
                continue;
            }
        };
        let Some(event) = Event::from_crossterm(event) else {
            continue;
        };
        log::trace!("Event: {:?}", event);

        if app.handle_event(event) == Flow::Quit {
            log::info!("Quit requested");
            break;
        }
        terminal.draw(|buf| app.render(buf))?;
    }

    Ok(())
}
