//! Win32 window backend

use std::cell::RefCell;
use std::ffi::c_void;

use windows::core::{Error, HSTRING, PCWSTR};
use windows::Win32::Foundation::{
    GetLastError, SetLastError, COLORREF, ERROR_SUCCESS, HINSTANCE, HWND, LPARAM, LRESULT, RECT,
    WIN32_ERROR, WPARAM,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::*;

use super::display::display_bounds;
use super::event::message_name;
use crate::application::ports::{Fetched, RawMessage, WindowBackend, WindowSpec};
use crate::domain::entities::{Disposition, ExStyle, MessageKind, WindowProcedure, WindowState};
use crate::domain::value_objects::{ClassRegistration, Rect, WindowHandle};
use crate::domain::HostError;

// The OS calls `wnd_proc` as a bare function, so the procedure registered on
// this thread lives here. Only windows created on this thread reach it.
thread_local! {
    static PROCEDURE: RefCell<Option<WindowProcedure>> = const { RefCell::new(None) };
}

/// Window procedure
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let kind = MessageKind::from_id(msg);
    let disposition = PROCEDURE.with(|p| p.borrow_mut().as_mut().map(|wp| wp.handle(kind)));

    match disposition {
        Some(Disposition::PostQuit(code)) => {
            log!(
                "{} received - posting quit message (code {})",
                message_name(msg),
                code
            );
            PostQuitMessage(code);
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

pub(crate) fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut c_void)
}

fn from_hwnd(hwnd: HWND) -> Option<WindowHandle> {
    WindowHandle::from_raw(hwnd.0 as isize)
}

/// Windowing backend over user32
pub struct Win32Backend {
    hinstance: HINSTANCE,
    /// Last retrieved message, dispatched with its original time and point
    current: MSG,
}

impl Win32Backend {
    /// Bind to the executable's module instance
    pub fn new() -> Result<Self, Error> {
        let module = unsafe { GetModuleHandleW(None)? };
        Ok(Self {
            hinstance: module.into(),
            current: MSG::default(),
        })
    }

    fn to_msg(&self, raw: &RawMessage) -> MSG {
        if self.current.message == raw.id && from_hwnd(self.current.hwnd) == raw.hwnd {
            return self.current;
        }
        MSG {
            hwnd: raw.hwnd.map(to_hwnd).unwrap_or_default(),
            message: raw.id,
            wParam: WPARAM(raw.wparam),
            lParam: LPARAM(raw.lparam),
            ..Default::default()
        }
    }
}

impl WindowBackend for Win32Backend {
    fn displays(&self) -> Vec<Rect> {
        display_bounds()
    }

    fn register_class(
        &mut self,
        class_name: &str,
        procedure: WindowProcedure,
    ) -> Result<ClassRegistration, HostError> {
        let class = HSTRING::from(class_name);
        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            lpfnWndProc: Some(wnd_proc),
            hInstance: self.hinstance,
            lpszClassName: PCWSTR(class.as_ptr()),
            ..Default::default()
        };

        let atom = unsafe { RegisterClassExW(&wc) };
        if atom == 0 {
            return Err(HostError::Registration {
                class: class_name.to_string(),
                reason: Error::from_win32().to_string(),
            });
        }

        PROCEDURE.with(|p| *p.borrow_mut() = Some(procedure));
        Ok(ClassRegistration {
            class_name: class_name.to_string(),
            atom,
        })
    }

    fn create_window(
        &mut self,
        class: &ClassRegistration,
        spec: &WindowSpec,
    ) -> Result<WindowHandle, HostError> {
        let class_name = HSTRING::from(class.class_name.as_str());
        let title = HSTRING::from(spec.title.as_str());

        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(spec.ex_style.0),
                &class_name,
                &title,
                WS_POPUP,
                spec.x,
                spec.y,
                spec.width,
                spec.height,
                None,
                None,
                self.hinstance,
                None,
            )
        }
        .map_err(|e| HostError::Creation {
            reason: e.to_string(),
        })?;

        from_hwnd(hwnd).ok_or_else(|| HostError::Creation {
            reason: "CreateWindowExW returned a null handle".to_string(),
        })
    }

    fn ex_style(&self, hwnd: WindowHandle) -> ExStyle {
        ExStyle(unsafe { GetWindowLongW(to_hwnd(hwnd), GWL_EXSTYLE) } as u32)
    }

    fn set_ex_style(&mut self, hwnd: WindowHandle, style: ExStyle) -> bool {
        unsafe {
            // A previous value of 0 is only a failure if the last error was set
            SetLastError(WIN32_ERROR(0));
            let prev = SetWindowLongW(to_hwnd(hwnd), GWL_EXSTYLE, style.0 as i32);
            prev != 0 || GetLastError() == ERROR_SUCCESS
        }
    }

    fn set_alpha(&mut self, hwnd: WindowHandle, alpha: u8) -> bool {
        unsafe { SetLayeredWindowAttributes(to_hwnd(hwnd), COLORREF(0), alpha, LWA_ALPHA).is_ok() }
    }

    fn hide(&mut self, hwnd: WindowHandle) {
        unsafe {
            let _ = ShowWindow(to_hwnd(hwnd), SW_HIDE);
        }
    }

    fn window_state(&self, hwnd: WindowHandle) -> WindowState {
        let raw = to_hwnd(hwnd);
        unsafe {
            let mut alpha = 0u8;
            let mut flags = LAYERED_WINDOW_ATTRIBUTES_FLAGS(0);
            let layered = GetLayeredWindowAttributes(
                raw,
                None,
                Some(&mut alpha as *mut u8),
                Some(&mut flags as *mut LAYERED_WINDOW_ATTRIBUTES_FLAGS),
            )
            .is_ok();

            let mut rect = RECT::default();
            let _ = GetWindowRect(raw, &mut rect);

            WindowState {
                ex_style: self.ex_style(hwnd),
                alpha: (layered && flags.0 & LWA_ALPHA.0 != 0).then_some(alpha),
                visible: IsWindowVisible(raw).as_bool(),
                bounds: Rect::new(rect.left, rect.top, rect.right, rect.bottom),
            }
        }
    }

    fn get_message(&mut self) -> Result<Fetched, HostError> {
        let mut msg = MSG::default();
        let ret = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        match ret.0 {
            -1 => Err(HostError::MessageLoop {
                reason: Error::from_win32().to_string(),
            }),
            0 => Ok(Fetched::Quit(msg.wParam.0 as i32)),
            _ => {
                self.current = msg;
                Ok(Fetched::Message(RawMessage {
                    hwnd: from_hwnd(msg.hwnd),
                    id: msg.message,
                    wparam: msg.wParam.0,
                    lparam: msg.lParam.0,
                }))
            }
        }
    }

    fn translate_message(&mut self, msg: &RawMessage) {
        let msg = self.to_msg(msg);
        unsafe {
            let _ = TranslateMessage(&msg);
        }
    }

    fn dispatch_message(&mut self, msg: &RawMessage) {
        let msg = self.to_msg(msg);
        unsafe {
            DispatchMessageW(&msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::HiddenWindowHost;
    use crate::domain::value_objects::is_offscreen;
    use crate::shared::config::HostConfig;

    fn config(class_name: &str) -> HostConfig {
        let mut config = HostConfig::default();
        config.window.class_name = class_name.to_string();
        config
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let mut backend = Win32Backend::new().unwrap();

        backend
            .register_class("HiddenWindowDuplicateTest", WindowProcedure::default())
            .unwrap();
        let err = backend
            .register_class("HiddenWindowDuplicateTest", WindowProcedure::default())
            .unwrap_err();
        assert!(matches!(err, HostError::Registration { .. }));
    }

    #[test]
    fn test_real_window_lifecycle() {
        let backend = Win32Backend::new().unwrap();
        let mut host = HiddenWindowHost::new(backend, config("HiddenWindowLifecycleTest"));

        let reg = host.register_window_class().unwrap();
        let hwnd = host.create_invisible_window(&reg).unwrap();
        host.apply_invisibility(hwnd);

        let state = host.backend().window_state(hwnd);
        assert!(state.ex_style.contains(ExStyle::LAYERED));
        assert!(state.ex_style.contains(ExStyle::TOOL_WINDOW));
        assert!(state.ex_style.contains(ExStyle::NO_ACTIVATE));
        assert_eq!(state.alpha, Some(1));
        assert!(!state.visible);
        assert!(state.is_single_pixel());
        assert!(is_offscreen(&state.bounds, &host.backend().displays()));

        // WM_CLOSE falls through to DefWindowProc, which destroys the window
        unsafe {
            PostMessageW(to_hwnd(hwnd), WM_CLOSE, WPARAM(0), LPARAM(0)).unwrap();
        }
        assert_eq!(host.run_message_loop(), Ok(0));
    }
}
