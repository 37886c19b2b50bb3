//! Win32 message names for the log

use windows::Win32::UI::WindowsAndMessaging::*;

/// Name of common messages, for the log
pub fn message_name(msg: u32) -> &'static str {
    match msg {
        WM_CREATE => "WM_CREATE",
        WM_DESTROY => "WM_DESTROY",
        WM_CLOSE => "WM_CLOSE",
        WM_QUIT => "WM_QUIT",
        WM_QUERYENDSESSION => "WM_QUERYENDSESSION",
        WM_ENDSESSION => "WM_ENDSESSION",
        WM_SHOWWINDOW => "WM_SHOWWINDOW",
        _ => "message",
    }
}
