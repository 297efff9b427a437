use crate::algorithms::pagination::break_if_needed;
use crate::config::{BODY_FONT_SIZE, LINE_BREAK_RESERVE, LayoutConstraints};
use crate::text::lines::{split_text_to_lines, strip_emphasis};
use resolutio_style::{FontSpec, TextAlign};
use resolutio_traits::Surface;

/// Indent of every line after the first.
const HANGING_INDENT: f32 = 10.0;
const SPACE_AFTER: f32 = 3.0;

/// Preambular clauses are painted plain; their emphasis markers are dropped.
pub(super) fn render<S: Surface + ?Sized>(
    surface: &mut S,
    content: &str,
    y: f32,
    constraints: &LayoutConstraints,
) -> f32 {
    let mut y = y;
    surface.set_font(FontSpec::normal(BODY_FONT_SIZE));

    let text = strip_emphasis(content);
    let lines = split_text_to_lines(surface, &text, constraints.max_content_width);
    for (index, line) in lines.iter().enumerate() {
        y = break_if_needed(surface, y, constraints, LINE_BREAK_RESERVE);
        let x = if index == 0 {
            constraints.margin
        } else {
            constraints.margin + HANGING_INDENT
        };
        surface.place_text(line, x, y, TextAlign::Left);
        y += constraints.line_height + 1.0;
    }

    y + SPACE_AFTER
}
