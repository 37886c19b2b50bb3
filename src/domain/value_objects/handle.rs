//! Opaque OS identifiers owned by the host

use std::num::NonZeroIsize;

/// Handle to the created window. Never null.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowHandle(NonZeroIsize);

impl WindowHandle {
    /// Wrap a raw OS handle, `None` for null
    pub fn from_raw(raw: isize) -> Option<Self> {
        NonZeroIsize::new(raw).map(Self)
    }

    /// Raw value as handed out by the OS
    pub fn raw(&self) -> isize {
        self.0.get()
    }
}

/// Proof that a window class was registered with the OS
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassRegistration {
    /// Class name windows are created with
    pub class_name: String,
    /// Atom returned by the registration call
    pub atom: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle_rejected() {
        assert!(WindowHandle::from_raw(0).is_none());
        assert_eq!(WindowHandle::from_raw(0x1234).map(|h| h.raw()), Some(0x1234));
    }
}
