use crate::error::PipelineError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use resolutio_layout::DocumentSymbol;
use resolutio_types::ResolutionMetadata;
use std::fs;
use std::path::{Path, PathBuf};

/// A finished PDF together with what it was rendered from.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub pages: usize,
    pub metadata: ResolutionMetadata,
    pub symbol: DocumentSymbol,
}

impl RenderedDocument {
    /// `UN_Resolution_2024_11_20.pdf` for a `Datum` of `2024-11-20`.
    ///
    /// Anything in the date other than letters and digits becomes `_`, so
    /// the name never carries a path separator or a `..` component.
    pub fn export_file_name(&self) -> String {
        let date: String = self
            .metadata
            .date
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        format!("UN_Resolution_{date}.pdf")
    }

    /// The PDF as a `data:` URI, for embedding in a preview frame.
    pub fn to_data_uri(&self) -> String {
        format!("data:application/pdf;base64,{}", STANDARD.encode(&self.bytes))
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), PipelineError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &self.bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(())
    }

    /// Writes under [`Self::export_file_name`] inside `dir`.
    pub fn write_into<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, PipelineError> {
        let path = dir.as_ref().join(self.export_file_name());
        self.write_to(&path)?;
        Ok(path)
    }
}
