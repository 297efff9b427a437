use crate::encoding::encode_win_ansi;
use crate::error::RenderError;
use crate::image::{add_image_xobject, deflate, validate};
use crate::metrics::text_width_mm;
use crate::utils::{flip_y, font_resource_name, mm_to_pt, styled_font_name};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, StringFormat, dictionary};
use resolutio_style::{FontSpec, TextAlign, TextStyle};
use resolutio_traits::{RasterImage, Surface, SurfaceError};
use resolutio_types::{Point, Rect, Size};

/// Stroke width in effect when nothing else was requested.
const DEFAULT_LINE_WIDTH_MM: f32 = 0.2;

/// Bezier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

const STYLES: [TextStyle; 4] = [
    TextStyle::Normal,
    TextStyle::Bold,
    TextStyle::Italic,
    TextStyle::BoldItalic,
];

/// Metadata written to the document information dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub subject: Option<String>,
}

#[derive(Default, Clone)]
struct PageRenderState {
    font: Option<(TextStyle, f32)>,
    line_width: Option<f32>,
}

struct PageContent {
    operations: Vec<Operation>,
    state: PageRenderState,
}

impl PageContent {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
            state: PageRenderState::default(),
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn set_line_width(&mut self, width_pt: f32) {
        if self.state.line_width != Some(width_pt) {
            self.push("w", vec![width_pt.into()]);
            self.state.line_width = Some(width_pt);
        }
    }
}

/// An in-memory A4 (or custom) PDF that layout code paints onto in
/// millimetres with a top-left origin.
///
/// Pages are collected as content operations and assembled into a
/// [`lopdf::Document`] by [`finish`](PdfSurface::finish).
pub struct PdfSurface {
    page_size: Size,
    font: FontSpec,
    pages: Vec<PageContent>,
    images: Vec<RasterImage>,
    info: DocumentInfo,
}

impl Default for PdfSurface {
    fn default() -> Self {
        Self::a4()
    }
}

impl PdfSurface {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            font: FontSpec::normal(12.0),
            pages: vec![PageContent::new()],
            images: Vec::new(),
            info: DocumentInfo::default(),
        }
    }

    pub fn a4() -> Self {
        Self::new(Size::new(210.0, 297.0))
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    fn page_height_pt(&self) -> f32 {
        mm_to_pt(self.page_size.height)
    }

    fn current_page(&mut self) -> &mut PageContent {
        if self.pages.is_empty() {
            self.pages.push(PageContent::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Assembles all pages into a PDF file.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for style in STYLES {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => styled_font_name(style),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font_resource_name(style), font_id);
        }

        let mut xobjects = Dictionary::new();
        for (index, image) in self.images.iter().enumerate() {
            let image_id = add_image_xobject(&mut document, image)?;
            xobjects.set(image_name(index), image_id);
        }

        let mut resources = dictionary! { "Font" => font_dict };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        let resources_id = document.add_object(resources);

        let width_pt = mm_to_pt(self.page_size.width);
        let height_pt = mm_to_pt(self.page_size.height);
        let mut page_ids = Vec::with_capacity(self.pages.len());
        for page in self.pages {
            let content = Content {
                operations: page.operations,
            };
            let compressed = deflate(&content.encode()?)?;
            let content_id = document.add_object(lopdf::Stream::new(
                dictionary! { "Filter" => "FlateDecode" },
                compressed,
            ));

            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width_pt.into(), height_pt.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i64,
            }),
        );

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        let mut info = dictionary! { "Producer" => Object::string_literal("resolutio") };
        if let Some(title) = self.info.title {
            info.set("Title", Object::String(encode_win_ansi(&title), StringFormat::Literal));
        }
        if let Some(subject) = self.info.subject {
            info.set("Subject", Object::String(encode_win_ansi(&subject), StringFormat::Literal));
        }
        let info_id = document.add_object(info);
        document.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        log::debug!(
            "PDF assembled: {} page(s), {} image(s), {} bytes",
            page_ids.len(),
            self.images.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

fn image_name(index: usize) -> String {
    format!("Im{}", index + 1)
}

impl Surface for PdfSurface {
    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    fn font(&self) -> FontSpec {
        self.font
    }

    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        text_width_mm(text, font)
    }

    fn place_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        let font = self.font;
        let start_x = align.start_x(x, text_width_mm(text, &font));
        let pdf_y = flip_y(mm_to_pt(y), self.page_height_pt());
        let page = self.current_page();

        page.push("BT", vec![]);
        if page.state.font != Some((font.style, font.size)) {
            page.push("Tf", vec![font_resource_name(font.style).into(), font.size.into()]);
            page.state.font = Some((font.style, font.size));
        }
        page.push("Td", vec![mm_to_pt(start_x).into(), pdf_y.into()]);
        page.push(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        );
        page.push("ET", vec![]);
    }

    fn draw_circle(&mut self, center: Point, radius: f32) {
        let height = self.page_height_pt();
        let cx = mm_to_pt(center.x);
        let cy = flip_y(mm_to_pt(center.y), height);
        let r = mm_to_pt(radius);
        let k = r * KAPPA;

        let page = self.current_page();
        page.set_line_width(mm_to_pt(DEFAULT_LINE_WIDTH_MM));
        page.push("m", vec![(cx + r).into(), cy.into()]);
        let quarters = [
            [cx + r, cy + k, cx + k, cy + r, cx, cy + r],
            [cx - k, cy + r, cx - r, cy + k, cx - r, cy],
            [cx - r, cy - k, cx - k, cy - r, cx, cy - r],
            [cx + k, cy - r, cx + r, cy - k, cx + r, cy],
        ];
        for quarter in quarters {
            page.push("c", quarter.iter().map(|v| (*v).into()).collect());
        }
        page.push("S", vec![]);
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32) {
        let height = self.page_height_pt();
        let page = self.current_page();
        page.set_line_width(mm_to_pt(width));
        page.push("m", vec![mm_to_pt(from.x).into(), flip_y(mm_to_pt(from.y), height).into()]);
        page.push("l", vec![mm_to_pt(to.x).into(), flip_y(mm_to_pt(to.y), height).into()]);
        page.push("S", vec![]);
    }

    fn draw_image(&mut self, image: &RasterImage, rect: Rect) -> Result<(), SurfaceError> {
        validate(image)?;

        let name = image_name(self.images.len());
        self.images.push(image.clone());

        let height = self.page_height_pt();
        let bottom = flip_y(mm_to_pt(rect.y + rect.height), height);
        let page = self.current_page();
        page.push("q", vec![]);
        page.push(
            "cm",
            vec![
                mm_to_pt(rect.width).into(),
                0.into(),
                0.into(),
                mm_to_pt(rect.height).into(),
                mm_to_pt(rect.x).into(),
                bottom.into(),
            ],
        );
        page.push("Do", vec![Object::Name(name.into_bytes())]);
        page.push("Q", vec![]);
        Ok(())
    }

    fn add_page(&mut self) {
        self.pages.push(PageContent::new());
    }

    fn page_size(&self) -> Size {
        self.page_size
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl std::fmt::Debug for PdfSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfSurface")
            .field("page_size", &self.page_size)
            .field("pages", &self.pages.len())
            .field("images", &self.images.len())
            .finish()
    }
}
