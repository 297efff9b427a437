//! Composes a whole resolution onto a surface: header first, then the body
//! blocks in source order.

use crate::LayoutError;
use crate::config::LayoutConstraints;
use crate::header::{DocumentSymbol, HeaderContext, layout_header};
use crate::nodes::{classify, render_block};
use resolutio_style::FontSpec;
use resolutio_traits::{RasterImage, Surface};
use resolutio_types::{CommitteeInfo, DEFAULT_COMMITTEE, ResolutionMetadata};

/// Summary of a finished composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeResult {
    /// The cursor below the last block on the last page.
    pub end_y: f32,
    pub pages: usize,
    pub blocks: usize,
}

#[derive(Debug, Clone)]
pub struct DocumentComposer {
    constraints: LayoutConstraints,
}

impl Default for DocumentComposer {
    fn default() -> Self {
        Self {
            constraints: LayoutConstraints::a4(),
        }
    }
}

impl DocumentComposer {
    pub fn new(constraints: LayoutConstraints) -> Result<Self, LayoutError> {
        constraints.validate()?;
        Ok(Self { constraints })
    }

    pub fn constraints(&self) -> &LayoutConstraints {
        &self.constraints
    }

    /// Unknown committee abbreviations fall back to the default committee.
    pub fn resolve_committee(abbreviation: &str) -> &'static CommitteeInfo {
        CommitteeInfo::find(abbreviation).unwrap_or_else(|| {
            log::warn!(
                "Unknown committee '{}', using {}",
                abbreviation,
                DEFAULT_COMMITTEE.abbreviation
            );
            &DEFAULT_COMMITTEE
        })
    }

    pub fn compose<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        metadata: &ResolutionMetadata,
        content: &str,
        symbol: DocumentSymbol,
        icon: Option<&RasterImage>,
    ) -> ComposeResult {
        let ctx = HeaderContext {
            metadata,
            committee: Self::resolve_committee(&metadata.committee),
            symbol,
            icon,
        };
        let body_start = layout_header(surface, &ctx, &self.constraints);
        log::debug!("Header done, body starts at y={body_start:.2}");

        let (end_y, blocks) = self.render_body(surface, content, body_start);
        let result = ComposeResult {
            end_y,
            pages: surface.page_count(),
            blocks,
        };
        log::info!(
            "Composed '{}': {} blocks on {} page(s)",
            metadata.title,
            result.blocks,
            result.pages
        );
        result
    }

    /// Renders every line of `content` as a block, threading the cursor.
    ///
    /// Returns the final cursor and the number of blocks rendered.
    pub fn render_body<S: Surface + ?Sized>(&self, surface: &mut S, content: &str, start_y: f32) -> (f32, usize) {
        surface.set_font(FontSpec::normal(crate::config::BODY_FONT_SIZE));

        let blocks = classify(content);
        let end_y = blocks.iter().fold(start_y, |y, block| {
            log::trace!("{:?} at y={:.2}", block.kind, y);
            render_block(surface, block, y, &self.constraints)
        });
        (end_y, blocks.len())
    }
}
