use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEventKind,
};

/// Input events the table view reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed
    Click {
        x: u16,
        y: u16,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Convert a crossterm event, dropping the kinds the view ignores.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                Key::from_code(key.code).map(|k| Event::Key {
                    key: k,
                    modifiers: key.modifiers.into(),
                })
            }
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                    modifiers: mouse.modifiers.into(),
                }),
                _ => None,
            },
            CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    fn from_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return None,
        };
        Some(key)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<CtButton> for MouseButton {
    fn from(btn: CtButton) -> Self {
        match btn {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    #[test]
    fn test_key_press_converts() {
        let event = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::SHIFT));
        assert_eq!(
            Event::from_crossterm(event),
            Some(Event::Key {
                key: Key::Char('a'),
                modifiers: Modifiers {
                    shift: true,
                    ..Default::default()
                },
            })
        );
    }

    #[test]
    fn test_unsupported_key_dropped() {
        let event = CrosstermEvent::Key(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!(Event::from_crossterm(event), None);
    }

    #[test]
    fn test_mouse_down_is_click() {
        let event = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(CtButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            Event::from_crossterm(event),
            Some(Event::Click {
                x: 4,
                y: 7,
                button: MouseButton::Left,
                modifiers: Modifiers::default(),
            })
        );

        let moved = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(Event::from_crossterm(moved), None);
    }
}
