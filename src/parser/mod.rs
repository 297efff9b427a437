//! Splits a resolution source into its front-matter metadata and markdown body.

mod error;
mod front_matter;

pub use error::ParseError;
pub use front_matter::{parse_metadata, parse_resolution, split_front_matter};
