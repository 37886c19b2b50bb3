//! Domain layer - platform-independent types and rules of the host

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::HostError;
