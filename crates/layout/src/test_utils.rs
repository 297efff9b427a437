//! A surface that records paint operations, with a fixed-advance font model.
//!
//! Every character is `size / 12` units wide in the regular faces and half as
//! wide again in the bold ones, so widths in tests are easy to compute by hand.
//! `char_scale` multiplies all widths.

use resolutio_style::{FontSpec, TextAlign, TextStyle};
use resolutio_traits::{RasterImage, Surface, SurfaceError};
use resolutio_types::{Point, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub align: TextAlign,
    pub font: FontSpec,
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Text(PlacedText),
    Circle { center: Point, radius: f32 },
    Line { from: Point, to: Point, width: f32 },
    Image { rect: Rect },
    NewPage,
}

#[derive(Debug)]
pub struct RecordingSurface {
    font: FontSpec,
    size: Size,
    pages: usize,
    pub ops: Vec<Op>,
    pub reject_images: bool,
    pub char_scale: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::with_page_height(297.0)
    }

    pub fn with_page_height(height: f32) -> Self {
        Self {
            font: FontSpec::normal(12.0),
            size: Size::new(210.0, height),
            pages: 1,
            ops: Vec::new(),
            reject_images: false,
            char_scale: 1.0,
        }
    }

    pub fn char_width(font: &FontSpec) -> f32 {
        let base = font.size / 12.0;
        match font.style {
            TextStyle::Bold | TextStyle::BoldItalic => base * 1.5,
            TextStyle::Normal | TextStyle::Italic => base,
        }
    }

    pub fn texts(&self) -> Vec<&PlacedText> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn find_text(&self, needle: &str) -> Option<&PlacedText> {
        self.texts().into_iter().find(|t| t.text.contains(needle))
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    fn font(&self) -> FontSpec {
        self.font
    }

    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * Self::char_width(font) * self.char_scale
    }

    fn place_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.ops.push(Op::Text(PlacedText {
            text: text.to_string(),
            x,
            y,
            align,
            font: self.font,
            page: self.pages,
        }));
    }

    fn draw_circle(&mut self, center: Point, radius: f32) {
        self.ops.push(Op::Circle { center, radius });
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32) {
        self.ops.push(Op::Line { from, to, width });
    }

    fn draw_image(&mut self, _image: &RasterImage, rect: Rect) -> Result<(), SurfaceError> {
        if self.reject_images {
            return Err(SurfaceError::Image("rejected by test surface".into()));
        }
        self.ops.push(Op::Image { rect });
        Ok(())
    }

    fn add_page(&mut self) {
        self.pages += 1;
        self.ops.push(Op::NewPage);
    }

    fn page_size(&self) -> Size {
        self.size
    }

    fn page_count(&self) -> usize {
        self.pages
    }
}
