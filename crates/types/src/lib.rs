pub mod committee;
pub mod document;
pub mod geometry;

pub use committee::{Article, CommitteeInfo, COMMITTEES, DEFAULT_COMMITTEE};
pub use document::{Resolution, ResolutionMetadata};
pub use geometry::{Point, Rect, Size};
