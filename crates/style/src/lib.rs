pub mod font;
pub mod text;

pub use font::{FontSpec, FontStyle, FontWeight, TextStyle, HELVETICA};
pub use text::TextAlign;
