pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use resolutio::traits::{FixedDocumentNumber, IconSource, NoIcon};
use resolutio::{PipelineBuilder, PipelineError, RenderedDocument, ResolutionPipeline};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const SYMBOL_NUMBER: u32 = 417;
pub const SYMBOL_YEAR: i32 = 2024;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub document: RenderedDocument,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_document(document: RenderedDocument) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&document.bytes)?;
        Ok(Self { document, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.document.bytes)
    }
}

pub fn pipeline_with_icon(icon: Arc<dyn IconSource>) -> Result<ResolutionPipeline, PipelineError> {
    PipelineBuilder::new()
        .with_icon_source(icon)
        .with_document_numbers(FixedDocumentNumber(SYMBOL_NUMBER))
        .with_year(SYMBOL_YEAR)
        .build()
}

/// Render a resolution source with a fixed symbol and no emblem.
pub fn render(source: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = pipeline_with_icon(Arc::new(NoIcon))?;
    let document = tokio::runtime::Runtime::new()?.block_on(pipeline.render(source))?;
    GeneratedPdf::from_document(document)
}

pub fn source(committee: &str, body: &str) -> String {
    format!(
        "---\ntitle: Zur Lage der Ozeane\nDatum: 2024-11-20\nLander: Chile, Fidschi, Norwegen\nAusschuss: {committee}\nTyp: Resolutionsentwurf\n---\n{body}"
    )
}
