//! Renders markdown resolutions with a front-matter header into paginated
//! PDF documents laid out like UN committee papers.
//!
//! The layout core lives in `resolutio-layout`; this crate ties it to the
//! front-matter parser, the lopdf surface and the emblem cache.

pub mod error;
pub mod example;
pub mod parser;
pub mod pipeline;

pub use error::PipelineError;
pub use parser::{ParseError, parse_resolution};
pub use pipeline::{
    Debouncer, PipelineBuilder, PipelineConfig, RandomDocumentNumber, RenderedDocument,
    ResolutionPipeline,
};

pub use resolutio_layout as layout;
pub use resolutio_render_lopdf as render;
pub use resolutio_resource as resource;
pub use resolutio_style as style;
pub use resolutio_traits as traits;
pub use resolutio_types as types;
