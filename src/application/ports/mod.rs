//! Application Ports - interfaces the infrastructure implements

pub mod window_port;

pub use window_port::{Fetched, RawMessage, WindowBackend, WindowSpec};
