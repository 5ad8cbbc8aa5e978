#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

/// Colors and attributes applied to written cells.
///
/// A `None` background keeps whatever the buffer already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Option<Rgb>,
    pub text: TextStyle,
}

impl Style {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: None,
            text: TextStyle {
                bold: false,
                dim: false,
                underline: false,
                reverse: false,
            },
        }
    }

    pub fn on(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text.underline = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.text.reverse = true;
        self
    }
}
