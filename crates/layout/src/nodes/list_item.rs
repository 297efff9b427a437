use crate::algorithms::pagination::break_if_needed;
use crate::config::{BODY_FONT_SIZE, LINE_BREAK_RESERVE, LayoutConstraints};
use crate::text::lines::split_text_to_lines;
use resolutio_style::{FontSpec, TextAlign};
use resolutio_traits::Surface;

pub const BULLET_GLYPH: char = '•';

const MARKER_INDENT: f32 = 10.0;
const CONTINUATION_INDENT: f32 = 15.0;

pub(super) fn render<S: Surface + ?Sized>(
    surface: &mut S,
    content: &str,
    y: f32,
    constraints: &LayoutConstraints,
) -> f32 {
    let mut y = y;
    surface.set_font(FontSpec::normal(BODY_FONT_SIZE));

    let text = format!("{BULLET_GLYPH} {content}");
    let max_width = constraints.max_content_width - CONTINUATION_INDENT;
    for (index, line) in split_text_to_lines(surface, &text, max_width).iter().enumerate() {
        y = break_if_needed(surface, y, constraints, LINE_BREAK_RESERVE);
        let indent = if index == 0 {
            MARKER_INDENT
        } else {
            CONTINUATION_INDENT
        };
        surface.place_text(line, constraints.margin + indent, y, TextAlign::Left);
        y += constraints.line_height + 1.0;
    }

    y
}
