//! Terminal drawing surface: a diffed cell buffer, input events, click
//! regions and single-line text inputs.

pub mod buffer;
pub mod event;
pub mod hit;
pub mod rect;
pub mod style;
pub mod terminal;
pub mod text;
pub mod text_input;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::HitMap;
pub use rect::Rect;
pub use style::{Rgb, Style, TextStyle};
pub use terminal::Terminal;
pub use text_input::{TextEditResult, TextInput};
