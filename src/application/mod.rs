//! Application Layer - the host workflow
//!
//! - **Ports**: the windowing API the host depends on
//! - **Services**: the lifecycle that drives it
//!
//! Depends only on the domain layer and contains no platform code.

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
