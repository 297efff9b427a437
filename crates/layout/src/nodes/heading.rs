use crate::algorithms::pagination::break_if_needed;
use crate::config::{HEADING_BREAK_RESERVE, LayoutConstraints};
use crate::nodes::HeadingLevel;
use crate::text::lines::split_text_to_lines;
use resolutio_style::{FontSpec, TextAlign};
use resolutio_traits::Surface;

const SPACE_BEFORE: f32 = 8.0;
const SPACE_AFTER: f32 = 5.0;
const EXTRA_LEADING: f32 = 2.0;

pub(super) fn render<S: Surface + ?Sized>(
    surface: &mut S,
    level: HeadingLevel,
    content: &str,
    y: f32,
    constraints: &LayoutConstraints,
) -> f32 {
    let mut y = y + SPACE_BEFORE;
    surface.set_font(FontSpec::bold(level.font_size()));

    for line in split_text_to_lines(surface, content, constraints.max_content_width) {
        y = break_if_needed(surface, y, constraints, HEADING_BREAK_RESERVE);
        surface.place_text(&line, constraints.margin, y, TextAlign::Left);
        y += constraints.line_height + EXTRA_LEADING;
    }

    y + SPACE_AFTER
}
