use resolutio_style::TextStyle;

pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// PostScript name of the standard Helvetica face for `style`.
pub fn styled_font_name(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Normal => "Helvetica",
        TextStyle::Bold => "Helvetica-Bold",
        TextStyle::Italic => "Helvetica-Oblique",
        TextStyle::BoldItalic => "Helvetica-BoldOblique",
    }
}

/// Name under which the face is registered in the page resources.
pub fn font_resource_name(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Normal => "F1",
        TextStyle::Bold => "F2",
        TextStyle::Italic => "F3",
        TextStyle::BoldItalic => "F4",
    }
}
