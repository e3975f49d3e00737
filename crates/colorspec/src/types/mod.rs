pub mod color;
pub mod format;

pub use color::{Hsl, Rgb};
pub use format::Format;
