//! Domain layer error types
//!
//! Failures that end the host lifecycle. All of them are fatal.

use thiserror::Error;

/// Exit status used for every setup or loop failure
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Main host error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The OS rejected the window class registration
    #[error("Failed to register window class {class:?}: {reason}")]
    Registration { class: String, reason: String },

    /// The OS could not allocate the window
    #[error("Failed to create window: {reason}")]
    Creation { reason: String },

    /// Message retrieval reported an error
    #[error("Message loop failed: {reason}")]
    MessageLoop { reason: String },
}

impl HostError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_exits_with_one() {
        let errors = [
            HostError::Registration {
                class: "HiddenWindowClass".to_string(),
                reason: "class already exists".to_string(),
            },
            HostError::Creation {
                reason: "out of memory".to_string(),
            },
            HostError::MessageLoop {
                reason: "invalid handle".to_string(),
            },
        ];

        for e in &errors {
            assert_eq!(e.exit_code(), 1);
        }
    }

    #[test]
    fn test_registration_message_names_class() {
        let e = HostError::Registration {
            class: "HiddenWindowClass".to_string(),
            reason: "class already exists".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("\"HiddenWindowClass\""));
        assert!(msg.contains("class already exists"));
    }
}
