// src/pipeline/builder.rs
use super::config::PipelineConfig;
use super::numbering::RandomDocumentNumber;
use super::orchestrator::ResolutionPipeline;
use crate::error::PipelineError;
use resolutio_layout::{DocumentComposer, LayoutConstraints};
use resolutio_resource::{FilesystemResourceProvider, MemoizedIcon};
use resolutio_traits::{DocumentNumberSource, IconSource};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `ResolutionPipeline`.
#[derive(Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
    icon: Option<Arc<dyn IconSource>>,
    numbers: Option<Box<dyn DocumentNumberSource>>,
    year: Option<i32>,
    constraints: Option<LayoutConstraints>,
}

impl fmt::Debug for PipelineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineBuilder")
            .field("config", &self.config)
            .field("icon", &self.icon)
            .field("custom_numbers", &self.numbers.is_some())
            .field("year", &self.year)
            .field("constraints", &self.constraints)
            .finish()
    }
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads a JSON config file. Relative directories in it are resolved
    /// against the file's own folder.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        let base = path_ref.parent().unwrap_or_else(|| Path::new(""));
        self.config = PipelineConfig::from_json(&source)?.relative_to(base);
        Ok(self)
    }

    /// Overrides where the header emblem comes from. Without this the
    /// emblem is loaded from `config.asset_dir` on first use.
    pub fn with_icon_source(mut self, icon: Arc<dyn IconSource>) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_document_numbers(mut self, numbers: impl DocumentNumberSource + 'static) -> Self {
        self.numbers = Some(Box::new(numbers));
        self
    }

    /// Fixes the year in the document symbol instead of using the current one.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_constraints(mut self, constraints: LayoutConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Consumes the builder and creates the `ResolutionPipeline`.
    pub fn build(self) -> Result<ResolutionPipeline, PipelineError> {
        let composer = match self.constraints {
            Some(constraints) => DocumentComposer::new(constraints)?,
            None => DocumentComposer::default(),
        };

        let icon: Arc<dyn IconSource> = match self.icon {
            Some(icon) => icon,
            None => {
                log::debug!(
                    "Using emblem '{}' from {}",
                    self.config.icon_path,
                    self.config.asset_dir.display()
                );
                let provider = Arc::new(FilesystemResourceProvider::new(&self.config.asset_dir));
                Arc::new(MemoizedIcon::new(provider, self.config.icon_path.clone()))
            }
        };

        let numbers: Box<dyn DocumentNumberSource> = match self.numbers {
            Some(numbers) => numbers,
            None => Box::new(RandomDocumentNumber::new()),
        };

        Ok(ResolutionPipeline::new(composer, icon, numbers, self.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolutio_traits::FixedDocumentNumber;
    use std::path::PathBuf;

    #[test]
    fn test_config_file_paths_are_relative_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolutio.json");
        fs::write(&path, r#"{"asset_dir": "assets", "icon_path": "logo.png"}"#).unwrap();

        let builder = PipelineBuilder::new().with_config_file(&path).unwrap();
        assert_eq!(builder.config().asset_dir, dir.path().join("assets"));
        assert_eq!(builder.config().icon_path, "logo.png");
        assert_eq!(builder.config().debounce_ms, 500);
    }

    #[test]
    fn test_missing_config_file() {
        let err = PipelineBuilder::new()
            .with_config_file("/definitely/not/here.json")
            .unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = PipelineBuilder::new().with_config_file(&path).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_degenerate_constraints_fail_build() {
        let err = PipelineBuilder::new()
            .with_constraints(LayoutConstraints::new(40.0, 297.0, 20.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, PipelineError::Layout(_)));
    }

    #[test]
    fn test_debug_lists_overrides() {
        let builder = PipelineBuilder::new().with_year(2031).with_document_numbers(FixedDocumentNumber(7));
        let printed = format!("{builder:?}");
        assert!(printed.contains("year: Some(2031)"));
        assert!(printed.contains("custom_numbers: true"));
    }

    #[test]
    fn test_default_build() {
        let builder = PipelineBuilder::new().with_config(PipelineConfig {
            asset_dir: PathBuf::from("/nonexistent"),
            ..Default::default()
        });
        assert!(builder.build().is_ok());
    }
}
