//! Window procedure entity - the message-handling state machine
//!
//! The OS delivers every notification for the hidden window here. Only the
//! destroy notification is acted upon; everything else goes to the platform's
//! default handling.

/// `WM_DESTROY`
pub const MSG_DESTROY: u32 = 0x0002;

/// Kind of notification delivered to the procedure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// The window is being destroyed
    Destroy,
    /// Any other notification, by message id
    Other(u32),
}

impl MessageKind {
    /// Classify a raw message id
    pub fn from_id(id: u32) -> Self {
        match id {
            MSG_DESTROY => MessageKind::Destroy,
            other => MessageKind::Other(other),
        }
    }
}

/// Procedure lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProcedureState {
    /// Waiting for messages
    #[default]
    Running,
    /// Quit has been requested, terminal
    Terminating,
}

/// What the caller must do with a handled message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Post a quit request carrying this exit code, then return 0
    PostQuit(i32),
    /// Delegate to the platform's default handler
    Default,
}

/// The message-handling procedure bound to the window class
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowProcedure {
    state: ProcedureState,
    quit_code: i32,
}

impl WindowProcedure {
    /// Create a procedure that quits with `quit_code` on destroy
    pub fn new(quit_code: i32) -> Self {
        Self {
            state: ProcedureState::Running,
            quit_code,
        }
    }

    /// Current state
    pub fn state(&self) -> ProcedureState {
        self.state
    }

    /// Handle one notification
    pub fn handle(&mut self, kind: MessageKind) -> Disposition {
        match (self.state, kind) {
            (ProcedureState::Running, MessageKind::Destroy) => {
                self.state = ProcedureState::Terminating;
                Disposition::PostQuit(self.quit_code)
            }
            // Terminating is terminal: a repeated destroy must not post a second quit
            _ => Disposition::Default,
        }
    }
}

impl Default for WindowProcedure {
    fn default() -> Self {
        Self::new(0)
    }
}
