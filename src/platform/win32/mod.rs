//! Win32 platform implementation

pub mod display;
pub mod event;
pub mod window;

pub use display::display_bounds;
pub use event::message_name;
pub use window::Win32Backend;
