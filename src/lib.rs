//! Hidden Window - keeps a process alive behind an invisible window
//!
//! The window lifecycle (class registration, creation, invisibility, message
//! loop) is written against the `WindowBackend` port, so everything except
//! the Win32 backend builds and tests on any platform.

// Declared first so the log! macro is visible to every module below
#[macro_use]
pub mod log;

pub mod application;
pub mod domain;
pub mod platform;
pub mod shared;
