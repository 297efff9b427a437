//! Fixed page geometry and typography of a resolution.
//!
//! All lengths are millimetres, font sizes are points.

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 20.0;

/// Base vertical advance used by the header and the plain-split block types.
pub const LINE_HEIGHT: f32 = 5.0;

/// The flow engine may paint down to the physical page edge before breaking.
pub const BOTTOM_MARGIN: f32 = 0.0;

pub const BODY_FONT_SIZE: f32 = 12.0;
pub const HEADING1_FONT_SIZE: f32 = 16.0;
pub const HEADING2_FONT_SIZE: f32 = 14.0;

/// `font_size * multiplier` is the line advance of flowed paragraphs.
pub const FLOW_LINE_HEIGHT_MULTIPLIER: f32 = 0.5;

pub const COMMITTEE_MAX_FONT_SIZE: f32 = 24.0;
pub const COMMITTEE_FONT_FLOOR: f32 = 8.0;
pub const MIN_READABLE_FONT_SIZE: f32 = 14.0;
pub const COMMITTEE_WRAPPED_FONT_SIZE: f32 = 18.0;

/// Horizontal space kept free for the emblem left of the committee name.
pub const LOGO_RESERVE: f32 = 20.0;
/// Horizontal space kept free for the symbol/date column.
pub const SYMBOL_COLUMN_RESERVE: f32 = 45.0;

/// Space that must remain below the cursor before a body block may start.
pub const BLOCK_BREAK_RESERVE: f32 = 30.0;
pub const HEADING_BREAK_RESERVE: f32 = 20.0;
pub const LINE_BREAK_RESERVE: f32 = 15.0;

/// Page geometry threaded read-only through a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstraints {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub max_content_width: f32,
    pub line_height: f32,
    pub bottom_margin: f32,
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self::a4()
    }
}

impl LayoutConstraints {
    pub fn a4() -> Self {
        Self::new(PAGE_WIDTH, PAGE_HEIGHT, MARGIN)
    }

    pub fn new(page_width: f32, page_height: f32, margin: f32) -> Self {
        Self {
            page_width,
            page_height,
            margin,
            max_content_width: page_width - 2.0 * margin,
            line_height: LINE_HEIGHT,
            bottom_margin: BOTTOM_MARGIN,
        }
    }

    /// The y at which content starts on a fresh page.
    pub fn top(&self) -> f32 {
        self.margin
    }

    /// The lowest y a block may start at when it needs `reserve` below it.
    pub fn break_threshold(&self, reserve: f32) -> f32 {
        self.page_height - self.margin - reserve
    }

    /// Width available for the committee name between emblem and symbol column.
    pub fn committee_name_width(&self) -> f32 {
        self.page_width - self.margin * 2.0 - LOGO_RESERVE - SYMBOL_COLUMN_RESERVE
    }

    pub(crate) fn validate(&self) -> Result<(), crate::LayoutError> {
        if !(self.page_width > 0.0 && self.page_height > 0.0) {
            return Err(crate::LayoutError::InvalidConstraints(format!(
                "page size {}x{} must be positive",
                self.page_width, self.page_height
            )));
        }
        if self.max_content_width <= 0.0 {
            return Err(crate::LayoutError::InvalidConstraints(format!(
                "margin {} leaves no content width on a {} wide page",
                self.margin, self.page_width
            )));
        }
        if self.page_height - self.margin - BLOCK_BREAK_RESERVE <= self.margin {
            return Err(crate::LayoutError::InvalidConstraints(format!(
                "page height {} leaves no room for body content",
                self.page_height
            )));
        }
        Ok(())
    }
}
