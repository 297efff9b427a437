//! The painting surface the layout core draws onto.
//!
//! The core never computes font metrics itself. It asks the surface for the
//! width of a string in a given font, selects the active font, and places
//! text and simple shapes at absolute page coordinates (millimetres, origin
//! top-left, y growing downwards, text anchored at its baseline).

use crate::icon::RasterImage;
use resolutio_style::{FontSpec, TextAlign};
use resolutio_types::{Point, Rect, Size};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SurfaceError {
    #[error("Image could not be placed: {0}")]
    Image(String),
}

pub trait Surface {
    /// Makes `font` the active font for subsequent `place_text` calls.
    fn set_font(&mut self, font: FontSpec);

    /// The currently active font.
    fn font(&self) -> FontSpec;

    /// Width of `text` rendered in `font`, in page units.
    fn text_width(&self, text: &str, font: &FontSpec) -> f32;

    /// Paints `text` in the active font with its baseline at `y`.
    fn place_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign);

    /// Strokes a circle outline.
    fn draw_circle(&mut self, center: Point, radius: f32);

    /// Strokes a straight line of the given stroke width.
    fn draw_line(&mut self, from: Point, to: Point, width: f32);

    /// Places a bitmap scaled into `rect`.
    fn draw_image(&mut self, image: &RasterImage, rect: Rect) -> Result<(), SurfaceError>;

    /// Starts a new page; subsequent painting goes there.
    fn add_page(&mut self);

    fn page_size(&self) -> Size;

    fn page_count(&self) -> usize;

    fn page_height(&self) -> f32 {
        self.page_size().height
    }

    /// Width of `text` in the active font.
    fn active_text_width(&self, text: &str) -> f32 {
        let font = self.font();
        self.text_width(text, &font)
    }
}
