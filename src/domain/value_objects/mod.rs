//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.

pub mod handle;
pub mod rect;

pub use handle::{ClassRegistration, WindowHandle};
pub use rect::{is_offscreen, offscreen_origin, Rect};
