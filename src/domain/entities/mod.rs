//! Domain Entities - Core objects of the host
//!
//! Entities are objects with a distinct identity that persists over time.

pub mod procedure;
pub mod window_state;

pub use procedure::{Disposition, MessageKind, ProcedureState, WindowProcedure};
pub use window_state::{ExStyle, WindowState};
