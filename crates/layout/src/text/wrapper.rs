//! Word-level line filling across styled segments.

use super::inline::StyledSegment;
use resolutio_style::{FontSpec, TextAlign, TextStyle};
use resolutio_traits::Surface;

/// Placement parameters of one flowed paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParams {
    pub x: f32,
    /// First baseline; also where the cursor restarts after a page break.
    pub y: f32,
    pub max_width: f32,
    pub font_size: f32,
    pub line_height_multiplier: f32,
    pub bottom_margin: f32,
}

impl FlowParams {
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_height_multiplier
    }
}

/// A line that was painted, with the baseline it was painted at.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidLine {
    pub y: f32,
    pub width: f32,
    pub words: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowResult {
    /// The cursor directly below the last line.
    pub end_y: f32,
    pub lines: Vec<LaidLine>,
    pub page_breaks: usize,
}

struct Word<'a> {
    text: &'a str,
    style: TextStyle,
    width: f32,
}

/// Splits `text` into alternating whitespace and non-whitespace runs.
fn word_runs(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let ws = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != ws)
            .map_or(rest.len(), |(i, _)| i);
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(run)
    })
}

/// Paints `segments` as wrapped lines starting at `params.x`/`params.y`.
///
/// A line takes words while their summed width stays within `max_width`; a
/// single word wider than that still gets its own line. After each full
/// line the cursor moves down one line height and, once it passes
/// `page_height - bottom_margin`, a page is added and the cursor returns to
/// `params.y`. The last line is always painted without a break check. The
/// surface is left on the regular face at `font_size`.
pub fn flow_segments<S: Surface + ?Sized>(
    surface: &mut S,
    segments: &[StyledSegment],
    params: &FlowParams,
) -> FlowResult {
    let line_height = params.line_height();
    let mut y = params.y;
    let mut lines = Vec::new();
    let mut page_breaks = 0;

    let mut buffer: Vec<Word<'_>> = Vec::new();
    let mut buffer_width = 0.0;

    for segment in segments {
        let font = FontSpec::new(segment.style, params.font_size);
        for run in word_runs(&segment.content) {
            let width = surface.text_width(run, &font);

            if !buffer.is_empty() && buffer_width + width > params.max_width {
                lines.push(paint_line(surface, &buffer, params, y));
                y += line_height;
                buffer.clear();
                buffer_width = 0.0;

                if y > surface.page_height() - params.bottom_margin {
                    log::debug!("Flow overflowed at y={y:.2}, continuing on a new page");
                    surface.add_page();
                    y = params.y;
                    page_breaks += 1;
                }
            }

            buffer.push(Word {
                text: run,
                style: segment.style,
                width,
            });
            buffer_width += width;
        }
    }

    if !buffer.is_empty() {
        lines.push(paint_line(surface, &buffer, params, y));
        y += line_height;
    }

    surface.set_font(FontSpec::normal(params.font_size));

    FlowResult {
        end_y: y,
        lines,
        page_breaks,
    }
}

/// Flows a single unstyled string.
pub fn flow_text<S: Surface + ?Sized>(surface: &mut S, text: &str, params: &FlowParams) -> FlowResult {
    flow_segments(surface, &[StyledSegment::plain(text)], params)
}

fn paint_line<S: Surface + ?Sized>(surface: &mut S, words: &[Word<'_>], params: &FlowParams, y: f32) -> LaidLine {
    let mut x = params.x;
    for word in words {
        surface.set_font(FontSpec::new(word.style, params.font_size));
        surface.place_text(word.text, x, y, TextAlign::Left);
        x += word.width;
    }
    LaidLine {
        y,
        width: x - params.x,
        words: words.len(),
    }
}
