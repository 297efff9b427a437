//! A complete sample resolution, used by `resolutio example` and the tests.

/// Security Council draft on the Sahel, covering every block kind.
pub const SAHEL_RESOLUTION: &str = include_str!("../demos/sahel.md");

/// The export name the sample renders to.
pub const SAHEL_FILE_NAME: &str = "UN_Resolution_2024_11_20.pdf";
