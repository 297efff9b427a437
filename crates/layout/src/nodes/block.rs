//! Line classification of the resolution body.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
}

impl HeadingLevel {
    pub fn font_size(self) -> f32 {
        match self {
            HeadingLevel::H1 => crate::config::HEADING1_FONT_SIZE,
            HeadingLevel::H2 => crate::config::HEADING2_FONT_SIZE,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading(HeadingLevel),
    /// A `**Participle** clause,` line; rendered with its markers stripped.
    Preambular,
    /// A numbered clause; rendered with inline emphasis.
    Operative,
    Bullet,
    Paragraph,
    Empty,
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub content: String,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// Classifies every line of `body`, one block per line, in order.
pub fn classify(body: &str) -> Vec<Block> {
    body.split('\n').map(classify_line).collect()
}

pub fn classify_line(line: &str) -> Block {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix("## ") {
        Block::new(BlockKind::Heading(HeadingLevel::H2), rest)
    } else if let Some(rest) = trimmed.strip_prefix("# ") {
        Block::new(BlockKind::Heading(HeadingLevel::H1), rest)
    } else if trimmed.starts_with("**") && trimmed.contains("**,") {
        Block::new(BlockKind::Preambular, trimmed)
    } else if is_numbered(trimmed) {
        Block::new(BlockKind::Operative, trimmed)
    } else if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        Block::new(BlockKind::Bullet, rest)
    } else if trimmed.is_empty() {
        Block::new(BlockKind::Empty, "")
    } else {
        Block::new(BlockKind::Paragraph, trimmed)
    }
}

/// `true` for lines opening with ASCII digits directly followed by `.`.
fn is_numbered(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line.as_bytes().get(digits) == Some(&b'.')
}
