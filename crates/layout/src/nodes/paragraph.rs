use crate::config::{BODY_FONT_SIZE, FLOW_LINE_HEIGHT_MULTIPLIER, LayoutConstraints};
use crate::text::inline::tokenize;
use crate::text::wrapper::{FlowParams, flow_segments};
use resolutio_style::FontSpec;
use resolutio_traits::Surface;

/// Operative clauses and free paragraphs keep their inline emphasis.
pub(super) fn render<S: Surface + ?Sized>(
    surface: &mut S,
    content: &str,
    y: f32,
    constraints: &LayoutConstraints,
) -> f32 {
    surface.set_font(FontSpec::normal(BODY_FONT_SIZE));

    let params = FlowParams {
        x: constraints.margin,
        y,
        max_width: constraints.max_content_width,
        font_size: BODY_FONT_SIZE,
        line_height_multiplier: FLOW_LINE_HEIGHT_MULTIPLIER,
        bottom_margin: constraints.bottom_margin,
    };
    flow_segments(surface, &tokenize(content), &params).end_y
}
