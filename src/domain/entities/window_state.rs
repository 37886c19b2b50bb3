//! WindowState entity - observable attributes of the hidden window
//!
//! Snapshot of what the OS reports for the window: extended style, layered
//! alpha, visibility and bounds.

use crate::domain::value_objects::Rect;

/// Extended window style bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct ExStyle(pub u32);

impl ExStyle {
    /// `WS_EX_NOACTIVATE` - never receives focus
    pub const NO_ACTIVATE: ExStyle = ExStyle(0x0800_0000);
    /// `WS_EX_TOOLWINDOW` - no taskbar or Alt+Tab entry
    pub const TOOL_WINDOW: ExStyle = ExStyle(0x0000_0080);
    /// `WS_EX_LAYERED` - composited with alpha
    pub const LAYERED: ExStyle = ExStyle(0x0008_0000);

    /// Styles requested at creation time
    pub const fn creation() -> ExStyle {
        ExStyle(Self::TOOL_WINDOW.0 | Self::NO_ACTIVATE.0)
    }

    pub fn contains(&self, other: ExStyle) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn with(self, other: ExStyle) -> ExStyle {
        ExStyle(self.0 | other.0)
    }
}

/// Snapshot of the window's attributes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowState {
    /// Current extended style
    pub ex_style: ExStyle,
    /// Layered alpha, `None` when the window is not layered
    pub alpha: Option<u8>,
    /// Whether the window is shown
    pub visible: bool,
    /// Screen bounds
    pub bounds: Rect,
}

impl WindowState {
    /// Whether the window is layered with exactly `alpha` and hidden
    pub fn is_invisible(&self, alpha: u8) -> bool {
        self.ex_style.contains(ExStyle::LAYERED) && self.alpha == Some(alpha) && !self.visible
    }

    /// Whether the window is exactly 1x1
    pub fn is_single_pixel(&self) -> bool {
        self.bounds.width() == 1 && self.bounds.height() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_style() {
        let style = ExStyle::creation();

        assert!(style.contains(ExStyle::TOOL_WINDOW));
        assert!(style.contains(ExStyle::NO_ACTIVATE));
        assert!(!style.contains(ExStyle::LAYERED));
        assert!(style.with(ExStyle::LAYERED).contains(ExStyle::LAYERED));
    }

    #[test]
    fn test_is_invisible() {
        let mut state = WindowState {
            ex_style: ExStyle::creation(),
            alpha: None,
            visible: false,
            bounds: Rect::from_pos_size(3000, 3000, 1, 1),
        };
        assert!(!state.is_invisible(1));
        assert!(state.is_single_pixel());

        state.ex_style = state.ex_style.with(ExStyle::LAYERED);
        state.alpha = Some(1);
        assert!(state.is_invisible(1));
        assert!(!state.is_invisible(2));

        state.visible = true;
        assert!(!state.is_invisible(1));
    }
}
