use super::event::{Key, Modifiers};

/// A single-line text field: text plus a cursor counted in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Create an input with the cursor after the last character.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key press for text editing.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                TextEditResult::Changed
            }

            Key::Char('u') if modifiers.ctrl => {
                if self.text.is_empty() {
                    TextEditResult::Handled
                } else {
                    self.text.clear();
                    self.cursor = 0;
                    TextEditResult::Changed
                }
            }

            Key::Backspace => {
                if self.delete_back() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete => {
                if self.delete_forward() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TextEditResult::Handled
            }

            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                TextEditResult::Handled
            }

            Key::Home => {
                self.cursor = 0;
                TextEditResult::Handled
            }

            Key::End => {
                self.cursor = self.char_count();
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
