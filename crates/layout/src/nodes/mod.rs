//! Body blocks: classification and per-kind rendering.

pub mod block;
mod heading;
mod list_item;
mod paragraph;
mod preambular;

pub use block::{Block, BlockKind, HeadingLevel, classify, classify_line};

use crate::algorithms::pagination::break_if_needed;
use crate::config::{BLOCK_BREAK_RESERVE, LayoutConstraints};
use resolutio_traits::Surface;

/// Paints one block at cursor `y` and returns the cursor below it.
///
/// A block that would start within the bottom reserve of the page is moved
/// to a fresh page first.
pub fn render_block<S: Surface + ?Sized>(
    surface: &mut S,
    block: &Block,
    y: f32,
    constraints: &LayoutConstraints,
) -> f32 {
    let y = break_if_needed(surface, y, constraints, BLOCK_BREAK_RESERVE);

    match block.kind {
        BlockKind::Heading(level) => heading::render(surface, level, &block.content, y, constraints),
        BlockKind::Preambular => preambular::render(surface, &block.content, y, constraints),
        BlockKind::Bullet => list_item::render(surface, &block.content, y, constraints),
        BlockKind::Operative | BlockKind::Paragraph => {
            paragraph::render(surface, &block.content, y, constraints)
        }
        BlockKind::Empty => y + constraints.line_height,
    }
}
