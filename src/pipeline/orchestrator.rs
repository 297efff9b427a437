use super::document::RenderedDocument;
use crate::error::PipelineError;
use crate::parser::parse_resolution;
use chrono::Datelike;
use resolutio_layout::{DocumentComposer, DocumentSymbol};
use resolutio_render_lopdf::{DocumentInfo, PdfSurface};
use resolutio_traits::{DocumentNumberSource, IconSource};
use resolutio_types::{Resolution, Size};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Turns resolution sources into PDF documents.
///
/// The pipeline is cheap to share behind an `Arc`; the icon is fetched at
/// most once per icon source and reused by every render.
pub struct ResolutionPipeline {
    composer: DocumentComposer,
    icon: Arc<dyn IconSource>,
    numbers: Mutex<Box<dyn DocumentNumberSource>>,
    year: Option<i32>,
}

impl fmt::Debug for ResolutionPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionPipeline")
            .field("composer", &self.composer)
            .field("icon", &self.icon)
            .field("year", &self.year)
            .finish_non_exhaustive()
    }
}

impl ResolutionPipeline {
    pub(crate) fn new(
        composer: DocumentComposer,
        icon: Arc<dyn IconSource>,
        numbers: Box<dyn DocumentNumberSource>,
        year: Option<i32>,
    ) -> Self {
        Self {
            composer,
            icon,
            numbers: Mutex::new(numbers),
            year,
        }
    }

    /// Parses `source` and renders it.
    pub async fn render(&self, source: &str) -> Result<RenderedDocument, PipelineError> {
        let resolution = parse_resolution(source)?;
        self.render_resolution(&resolution).await
    }

    pub async fn render_resolution(
        &self,
        resolution: &Resolution,
    ) -> Result<RenderedDocument, PipelineError> {
        let start = Instant::now();
        let icon = self.icon.fetch().await;
        let symbol = self.next_symbol().await;

        let constraints = self.composer.constraints();
        let mut surface = PdfSurface::new(Size::new(constraints.page_width, constraints.page_height))
            .with_info(DocumentInfo {
                title: Some(resolution.metadata.title.clone()).filter(|t| !t.is_empty()),
                subject: Some(symbol.to_string()),
            });

        let result = self.composer.compose(
            &mut surface,
            &resolution.metadata,
            &resolution.content,
            symbol,
            icon.as_deref(),
        );
        let bytes = surface.finish()?;

        log::info!(
            "Rendered {} ({} page(s), {} bytes) in {:.2?}",
            symbol,
            result.pages,
            bytes.len(),
            start.elapsed()
        );

        Ok(RenderedDocument {
            bytes,
            pages: result.pages,
            metadata: resolution.metadata.clone(),
            symbol,
        })
    }

    async fn next_symbol(&self) -> DocumentSymbol {
        let number = self.numbers.lock().await.next_number();
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());
        DocumentSymbol::new(year, number)
    }
}
