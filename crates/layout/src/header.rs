//! The resolution header: masthead, committee name, emblem, distribution
//! column, rule, sponsors, title and opening line.

use crate::config::{
    COMMITTEE_FONT_FLOOR, COMMITTEE_MAX_FONT_SIZE, COMMITTEE_WRAPPED_FONT_SIZE, LayoutConstraints,
    MIN_READABLE_FONT_SIZE,
};
use crate::text::lines::{split_into_two_lines, split_text_to_lines};
use chrono::NaiveDate;
use resolutio_style::{FontSpec, TextAlign};
use resolutio_traits::{RasterImage, Surface};
use resolutio_types::{CommitteeInfo, Point, Rect, ResolutionMetadata};
use std::fmt;

const ORGANISATION: &str = "Vereinte Nationen";
const DISTRIBUTION: &str = "Verteilung: Allgemein";

const MASTHEAD_FONT_SIZE: f32 = 18.0;
const SYMBOL_FONT_SIZE: f32 = 16.0;
const DISTRIBUTION_FONT_SIZE: f32 = 11.0;
const SPONSORS_FONT_SIZE: f32 = 13.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const OPENING_FONT_SIZE: f32 = 12.0;

const EMBLEM_RADIUS: f32 = 8.0;
const EMBLEM_IMAGE_HALF: f32 = 6.0;
const RULE_WIDTH: f32 = 0.5;

/// Leading of a wrapped committee name: 1.15 em, converted from points.
const WRAPPED_LEADING_FACTOR: f32 = 1.15;
const POINTS_PER_MM: f32 = 72.0 / 25.4;

const MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober",
    "November", "Dezember",
];

/// The document symbol printed top right, e.g. `S/2024/512`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSymbol {
    pub year: i32,
    pub number: u32,
}

impl DocumentSymbol {
    pub fn new(year: i32, number: u32) -> Self {
        Self { year, number }
    }
}

impl fmt::Display for DocumentSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S/{}/{}", self.year, self.number)
    }
}

/// How the committee name is set in the header.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitteeNameFit {
    SingleLine { size: f32 },
    TwoLines { lines: (String, String), size: f32 },
}

/// Everything the header needs besides the surface and the page geometry.
#[derive(Debug, Clone, Copy)]
pub struct HeaderContext<'a> {
    pub metadata: &'a ResolutionMetadata,
    pub committee: &'a CommitteeInfo,
    pub symbol: DocumentSymbol,
    pub icon: Option<&'a RasterImage>,
}

/// Shrinks the bold committee name one point at a time until it fits
/// `max_width` or reaches the floor. Below the readable minimum the name is
/// split in two and set at a fixed size instead.
pub fn fit_committee_name<S: Surface + ?Sized>(surface: &S, name: &str, max_width: f32) -> CommitteeNameFit {
    let mut size = COMMITTEE_MAX_FONT_SIZE;
    while surface.text_width(name, &FontSpec::bold(size)) > max_width && size > COMMITTEE_FONT_FLOOR {
        size -= 1.0;
    }

    if size < MIN_READABLE_FONT_SIZE {
        CommitteeNameFit::TwoLines {
            lines: split_into_two_lines(name),
            size: COMMITTEE_WRAPPED_FONT_SIZE,
        }
    } else {
        CommitteeNameFit::SingleLine { size }
    }
}

/// Formats an ISO date as German long form, e.g. `2024-11-20` as
/// `20. November 2024`. Anything else is returned unchanged.
pub fn format_german_date(date: &str) -> String {
    use chrono::Datelike;

    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{}. {} {}",
            parsed.day(),
            MONTHS[parsed.month0() as usize],
            parsed.year()
        ),
        Err(e) => {
            log::warn!("Date '{date}' is not YYYY-MM-DD ({e}); printing it verbatim");
            date.to_string()
        }
    }
}

/// Paints the header starting at the top margin and returns the y at which
/// the body starts.
pub fn layout_header<S: Surface + ?Sized>(
    surface: &mut S,
    ctx: &HeaderContext<'_>,
    constraints: &LayoutConstraints,
) -> f32 {
    let margin = constraints.margin;
    let right = constraints.page_width - margin;
    let line_height = constraints.line_height;
    let mut y = constraints.top();

    surface.set_font(FontSpec::bold(MASTHEAD_FONT_SIZE));
    surface.place_text(ORGANISATION, margin, y, TextAlign::Left);
    surface.set_font(FontSpec::bold(SYMBOL_FONT_SIZE));
    surface.place_text(&ctx.symbol.to_string(), right, y, TextAlign::Right);
    y += 15.0;

    let fit = fit_committee_name(surface, ctx.committee.name, constraints.committee_name_width());
    log::debug!("Committee name '{}' set as {:?}", ctx.committee.name, fit);

    paint_emblem(surface, ctx.icon, Point::new(margin + 8.0, y - 3.0));

    let name_x = margin + crate::config::LOGO_RESERVE;
    match &fit {
        CommitteeNameFit::TwoLines { lines, size } => {
            surface.set_font(FontSpec::bold(*size));
            let first_y = y - line_height + 1.0;
            surface.place_text(&lines.0, name_x, first_y, TextAlign::Left);
            let leading = size * WRAPPED_LEADING_FACTOR / POINTS_PER_MM;
            surface.place_text(&lines.1, name_x, first_y + leading, TextAlign::Left);
        }
        CommitteeNameFit::SingleLine { size } => {
            surface.set_font(FontSpec::bold(*size));
            surface.place_text(ctx.committee.name, name_x, y, TextAlign::Left);
        }
    }

    surface.set_font(FontSpec::normal(DISTRIBUTION_FONT_SIZE));
    surface.place_text(DISTRIBUTION, right, y - 8.0, TextAlign::Right);
    surface.place_text(&format_german_date(&ctx.metadata.date), right, y - 3.0, TextAlign::Right);

    y += 10.0;
    surface.draw_line(Point::new(margin, y), Point::new(right, y), RULE_WIDTH);
    y += 10.0;

    surface.set_font(FontSpec::bold(SPONSORS_FONT_SIZE));
    let sponsors = format!("{}: {}", ctx.metadata.countries, ctx.metadata.kind);
    for line in split_text_to_lines(surface, &sponsors, constraints.max_content_width) {
        surface.place_text(&line, margin, y, TextAlign::Left);
        y += line_height + 1.0;
    }
    y += 5.0;

    surface.set_font(FontSpec::bold(TITLE_FONT_SIZE));
    let center = constraints.page_width / 2.0;
    for line in split_text_to_lines(surface, &ctx.metadata.title, constraints.max_content_width) {
        surface.place_text(&line, center, y, TextAlign::Center);
        y += line_height + 3.0;
    }
    y += 15.0;

    surface.set_font(FontSpec::italic(OPENING_FONT_SIZE));
    surface.place_text(&ctx.committee.opening_line(), margin, y, TextAlign::Left);
    y + 15.0
}

/// The circle outline is always drawn; the bitmap only when available.
fn paint_emblem<S: Surface + ?Sized>(surface: &mut S, icon: Option<&RasterImage>, center: Point) {
    surface.draw_circle(center, EMBLEM_RADIUS);

    let Some(icon) = icon else {
        return;
    };
    let rect = Rect::centered_square(center, EMBLEM_IMAGE_HALF);
    if let Err(e) = surface.draw_image(icon, rect) {
        log::warn!("Emblem could not be placed, continuing without it: {e}");
    }
}
