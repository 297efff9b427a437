//! PDF output for resolution layouts using the lopdf library.
//!
//! [`PdfSurface`] implements the layout core's painting surface on top of the
//! standard-14 Helvetica faces, so no font data is embedded. Text widths come
//! from the Adobe font metrics of those faces.

mod encoding;
mod error;
mod image;
pub mod metrics;
mod surface;
mod utils;

pub use encoding::encode_win_ansi;
pub use error::RenderError;
pub use surface::{DocumentInfo, PdfSurface};
pub use utils::{POINTS_PER_MM, flip_y, font_resource_name, mm_to_pt, styled_font_name};
