use serde::{Deserialize, Serialize};
use std::fmt;

/// The only family the resolution layout uses.
pub const HELVETICA: &str = "helvetica";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Weight and slant of a text run, as produced by inline emphasis markers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl TextStyle {
    pub fn from_parts(weight: FontWeight, style: FontStyle) -> Self {
        match (weight, style) {
            (FontWeight::Regular, FontStyle::Normal) => TextStyle::Normal,
            (FontWeight::Bold, FontStyle::Normal) => TextStyle::Bold,
            (FontWeight::Regular, FontStyle::Italic) => TextStyle::Italic,
            (FontWeight::Bold, FontStyle::Italic) => TextStyle::BoldItalic,
        }
    }

    pub fn weight(self) -> FontWeight {
        match self {
            TextStyle::Bold | TextStyle::BoldItalic => FontWeight::Bold,
            TextStyle::Normal | TextStyle::Italic => FontWeight::Regular,
        }
    }

    pub fn font_style(self) -> FontStyle {
        match self {
            TextStyle::Italic | TextStyle::BoldItalic => FontStyle::Italic,
            TextStyle::Normal | TextStyle::Bold => FontStyle::Normal,
        }
    }

    pub fn is_bold(self) -> bool {
        self.weight() == FontWeight::Bold
    }

    pub fn is_italic(self) -> bool {
        self.font_style() == FontStyle::Italic
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextStyle::Normal => "normal",
            TextStyle::Bold => "bold",
            TextStyle::Italic => "italic",
            TextStyle::BoldItalic => "bolditalic",
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete font selection: family, weight/slant and size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: &'static str,
    pub style: TextStyle,
    pub size: f32,
}

impl FontSpec {
    pub fn new(style: TextStyle, size: f32) -> Self {
        Self {
            family: HELVETICA,
            style,
            size,
        }
    }

    pub fn normal(size: f32) -> Self {
        Self::new(TextStyle::Normal, size)
    }

    pub fn bold(size: f32) -> Self {
        Self::new(TextStyle::Bold, size)
    }

    pub fn italic(size: f32) -> Self {
        Self::new(TextStyle::Italic, size)
    }

    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}
