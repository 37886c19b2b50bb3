//! Application Services - Coordination of the window lifecycle

pub mod host;

pub use host::HiddenWindowHost;
