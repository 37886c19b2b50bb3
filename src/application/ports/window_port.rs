//! WindowPort - interface to the native windowing API
//!
//! The host drives the window lifecycle only through this trait, so the
//! Win32 backend and the in-memory test backend are interchangeable.

use crate::domain::entities::{ExStyle, WindowProcedure, WindowState};
use crate::domain::value_objects::{ClassRegistration, Rect, WindowHandle};
use crate::domain::HostError;

/// Parameters for window creation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Extended style requested at creation
    pub ex_style: ExStyle,
}

/// A message pulled off the thread's queue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawMessage {
    /// Target window, `None` for thread messages
    pub hwnd: Option<WindowHandle>,
    pub id: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl RawMessage {
    pub fn new(hwnd: Option<WindowHandle>, id: u32) -> Self {
        Self {
            hwnd,
            id,
            wparam: 0,
            lparam: 0,
        }
    }
}

/// Result of one blocking retrieval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fetched {
    /// A message to translate and dispatch
    Message(RawMessage),
    /// The queue was terminated with this exit code
    Quit(i32),
}

/// Port interface for the windowing system
pub trait WindowBackend {
    /// Bounds of every attached display
    fn displays(&self) -> Vec<Rect>;

    /// Register a window class bound to `procedure`
    fn register_class(
        &mut self,
        class_name: &str,
        procedure: WindowProcedure,
    ) -> Result<ClassRegistration, HostError>;

    /// Create a window of a registered class
    fn create_window(
        &mut self,
        class: &ClassRegistration,
        spec: &WindowSpec,
    ) -> Result<WindowHandle, HostError>;

    /// Read the extended style
    fn ex_style(&self, hwnd: WindowHandle) -> ExStyle;

    /// Replace the extended style, `false` if the OS refused
    fn set_ex_style(&mut self, hwnd: WindowHandle, style: ExStyle) -> bool;

    /// Set layered alpha, `false` if the OS refused
    fn set_alpha(&mut self, hwnd: WindowHandle, alpha: u8) -> bool;

    /// Hide the window
    fn hide(&mut self, hwnd: WindowHandle);

    /// Snapshot of the window's attributes
    fn window_state(&self, hwnd: WindowHandle) -> WindowState;

    /// Block until the next message arrives
    fn get_message(&mut self) -> Result<Fetched, HostError>;

    /// Produce character messages from key input
    fn translate_message(&mut self, msg: &RawMessage);

    /// Deliver a message to its window's procedure
    fn dispatch_message(&mut self, msg: &RawMessage);
}
