use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid layout constraints: {0}")]
    InvalidConstraints(String),
}

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod header;
pub mod nodes;
pub mod text;

pub use self::config::LayoutConstraints;
pub use self::engine::{ComposeResult, DocumentComposer};
pub use self::header::{CommitteeNameFit, DocumentSymbol, HeaderContext};
pub use self::nodes::{Block, BlockKind, HeadingLevel, classify, render_block};
pub use self::text::inline::{StyledSegment, tokenize};
pub use self::text::wrapper::{FlowParams, FlowResult, flow_segments, flow_text};

#[cfg(test)]
mod test_utils;
