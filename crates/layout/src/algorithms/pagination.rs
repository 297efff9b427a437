use crate::config::LayoutConstraints;
use resolutio_traits::Surface;

/// Starts a new page when `y` lies below the break threshold for `reserve`.
///
/// Returns the cursor to continue at: the top margin after a break, `y`
/// otherwise.
pub fn break_if_needed<S: Surface + ?Sized>(
    surface: &mut S,
    y: f32,
    constraints: &LayoutConstraints,
    reserve: f32,
) -> f32 {
    if y > constraints.break_threshold(reserve) {
        surface.add_page();
        constraints.top()
    } else {
        y
    }
}
