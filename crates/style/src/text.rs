use serde::{Deserialize, Serialize};

/// Horizontal anchoring of a placed string relative to its x coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// Returns the x at which a string of `width` starts when anchored at `x`.
    pub fn start_x(self, x: f32, width: f32) -> f32 {
        match self {
            TextAlign::Left => x,
            TextAlign::Right => x - width,
            TextAlign::Center => x - width / 2.0,
        }
    }
}
