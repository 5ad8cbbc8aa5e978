//! Colors used by the table view.

use crate::term::{Rgb, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    pub error: Rgb,
    pub info: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Rgb::new(78, 204, 163),     // Teal
            background: Rgb::new(26, 26, 46),    // Dark blue
            surface: Rgb::new(40, 40, 70),       // Lighter blue
            text: Rgb::new(232, 232, 232),       // Off-white
            text_muted: Rgb::new(127, 140, 141), // Gray
            error: Rgb::new(231, 76, 60),        // Red
            info: Rgb::new(52, 152, 219),        // Blue
        }
    }
}

impl Theme {
    pub fn base(&self) -> Style {
        Style::fg(self.text).on(self.background)
    }

    pub fn title(&self) -> Style {
        Style::fg(self.primary).bold()
    }

    pub fn muted(&self) -> Style {
        Style::fg(self.text_muted)
    }

    pub fn header(&self) -> Style {
        Style::fg(self.primary).bold()
    }

    pub fn input(&self, focused: bool) -> Style {
        let style = Style::fg(self.text).on(self.surface);
        if focused { style.underline() } else { style }
    }

    pub fn editor(&self) -> Style {
        Style::fg(self.background).on(self.info)
    }

    pub fn cursor(&self) -> Style {
        Style::fg(self.text).on(self.background).reverse()
    }

    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::fg(self.background).on(self.primary).bold()
        } else {
            Style::fg(self.text_muted).on(self.surface).dim()
        }
    }

    pub fn notice(&self) -> Style {
        Style::fg(self.error)
    }
}
