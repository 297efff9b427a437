//! Resolution rendering pipeline.
//!
//! - [`PipelineBuilder`]: fluent construction from config, icon source and
//!   document number source
//! - [`ResolutionPipeline`]: parse, compose and serialize one resolution
//! - [`RenderedDocument`]: the PDF bytes with export helpers
//! - [`Debouncer`]: collapses bursts of edits for live previews
//!
//! # Example
//!
//! ```ignore
//! use resolutio::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_config_file("resolutio.json")?
//!     .build()?;
//!
//! let document = pipeline.render(&source).await?;
//! document.write_into("out")?;
//! ```

mod builder;
mod config;
mod document;
mod numbering;
mod orchestrator;
mod preview;

pub use builder::PipelineBuilder;
pub use config::{DEFAULT_DEBOUNCE_MS, DEFAULT_ICON_PATH, PipelineConfig};
pub use document::RenderedDocument;
pub use numbering::{DOCUMENT_NUMBER_RANGE, RandomDocumentNumber};
pub use orchestrator::ResolutionPipeline;
pub use preview::Debouncer;
