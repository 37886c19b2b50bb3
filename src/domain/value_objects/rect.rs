//! Rect value object - screen rectangle in physical pixels
//!
//! Used for display bounds and for placing the window off-screen.

/// A rectangle defined by its bounds (right/bottom exclusive)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle from bounds
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from position and size
    pub fn from_pos_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x.saturating_add(width),
            bottom: y.saturating_add(height),
        }
    }

    /// Get width
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Get height
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Check if this rectangle intersects another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Check that `rect` lies outside every display
pub fn is_offscreen(rect: &Rect, displays: &[Rect]) -> bool {
    displays.iter().all(|d| !rect.intersects(d))
}

/// Pick an origin for a `width`x`height` window that no display covers.
///
/// Keeps `preferred` when it is already off-screen, otherwise moves the
/// window just past the bottom-right corner of the whole desktop.
pub fn offscreen_origin(
    preferred: (i32, i32),
    width: i32,
    height: i32,
    displays: &[Rect],
) -> (i32, i32) {
    let wanted = Rect::from_pos_size(preferred.0, preferred.1, width, height);
    if is_offscreen(&wanted, displays) {
        return preferred;
    }

    let desktop = displays
        .iter()
        .skip(1)
        .fold(displays[0], |acc, d| acc.union(d));
    (desktop.right, desktop.bottom)
}
