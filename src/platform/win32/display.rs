//! Display enumeration

use windows::Win32::Foundation::{BOOL, LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{EnumDisplayMonitors, HDC, HMONITOR};

use crate::domain::value_objects::Rect;

unsafe extern "system" fn collect_monitor(
    _monitor: HMONITOR,
    _hdc: HDC,
    bounds: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let displays = &mut *(data.0 as *mut Vec<Rect>);
    if let Some(r) = bounds.as_ref() {
        displays.push(Rect::new(r.left, r.top, r.right, r.bottom));
    }
    BOOL(1)
}

/// Bounds of every attached display in virtual-screen coordinates
pub fn display_bounds() -> Vec<Rect> {
    let mut displays: Vec<Rect> = Vec::new();
    unsafe {
        let _ = EnumDisplayMonitors(
            HDC::default(),
            None,
            Some(collect_monitor),
            LPARAM(&mut displays as *mut Vec<Rect> as isize),
        );
    }
    displays
}
