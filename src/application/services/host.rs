//! HiddenWindowHost - drives the window lifecycle
//!
//! register class -> create window -> apply invisibility -> message loop.
//! The class registration and window handle are passed between the steps
//! explicitly; the host itself keeps no window state.

use crate::application::ports::{Fetched, WindowBackend, WindowSpec};
use crate::domain::entities::{ExStyle, WindowProcedure};
use crate::domain::value_objects::{offscreen_origin, ClassRegistration, WindowHandle};
use crate::domain::HostError;
use crate::shared::config::{HostConfig, WINDOW_SIZE};

/// Owns the backend for the lifetime of the process
pub struct HiddenWindowHost<B>
where
    B: WindowBackend,
{
    backend: B,
    config: HostConfig,
}

impl<B> HiddenWindowHost<B>
where
    B: WindowBackend,
{
    /// Create a host over `backend`
    pub fn new(backend: B, config: HostConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Register the window class bound to a fresh procedure
    pub fn register_window_class(&mut self) -> Result<ClassRegistration, HostError> {
        let procedure = WindowProcedure::new(self.config.exit.quit_code);
        let registration = self
            .backend
            .register_class(&self.config.window.class_name, procedure)?;
        log!(
            "Registered window class {:?} (atom=0x{:04X})",
            registration.class_name,
            registration.atom
        );
        Ok(registration)
    }

    /// Creation parameters: 1x1 popup placed where no display can show it
    pub fn window_spec(&self) -> WindowSpec {
        let displays = self.backend.displays();
        let preferred = (self.config.window.x, self.config.window.y);
        let (x, y) = offscreen_origin(preferred, WINDOW_SIZE, WINDOW_SIZE, &displays);
        if (x, y) != preferred {
            log!(
                "Position ({}, {}) is covered by a display, moving window to ({}, {})",
                preferred.0,
                preferred.1,
                x,
                y
            );
        }

        WindowSpec {
            title: self.config.window.title.clone(),
            x,
            y,
            width: WINDOW_SIZE,
            height: WINDOW_SIZE,
            ex_style: ExStyle::creation(),
        }
    }

    /// Create the tool-window, no-activate popup
    pub fn create_invisible_window(
        &mut self,
        registration: &ClassRegistration,
    ) -> Result<WindowHandle, HostError> {
        let spec = self.window_spec();
        let hwnd = self.backend.create_window(registration, &spec)?;
        log!(
            "Window created: HWND=0x{:X} at ({}, {}) size {}x{}",
            hwnd.raw(),
            spec.x,
            spec.y,
            spec.width,
            spec.height
        );
        Ok(hwnd)
    }

    /// Make the window layered, nearly transparent and hidden.
    ///
    /// Has no error path: a refused call leaves the window in a degraded
    /// (visible or opaque) state and is only logged.
    pub fn apply_invisibility(&mut self, hwnd: WindowHandle) {
        let alpha = self.config.window.alpha;

        let style = self.backend.ex_style(hwnd).with(ExStyle::LAYERED);
        if !self.backend.set_ex_style(hwnd, style) {
            log!("Warning: failed to set WS_EX_LAYERED on 0x{:X}", hwnd.raw());
        }
        if !self.backend.set_alpha(hwnd, alpha) {
            log!("Warning: failed to set alpha {} on 0x{:X}", alpha, hwnd.raw());
        }
        self.backend.hide(hwnd);

        let state = self.backend.window_state(hwnd);
        log!(
            "Invisibility applied: ex_style=0x{:08X}, alpha={:?}, visible={}",
            state.ex_style.0,
            state.alpha,
            state.visible
        );
    }

    /// Retrieve, translate and dispatch until the queue terminates
    pub fn run_message_loop(&mut self) -> Result<i32, HostError> {
        let mut msg_count = 0u64;
        loop {
            match self.backend.get_message()? {
                Fetched::Message(msg) => {
                    msg_count += 1;
                    self.backend.translate_message(&msg);
                    self.backend.dispatch_message(&msg);
                }
                Fetched::Quit(code) => {
                    log!(
                        "Quit received after {} messages, exit code {}",
                        msg_count,
                        code
                    );
                    return Ok(code);
                }
            }
        }
    }

    /// Whole lifecycle, returning the process exit code.
    ///
    /// Nothing is unregistered or destroyed on the way out; the OS reclaims
    /// the class and window at process exit.
    pub fn run(&mut self) -> i32 {
        match self.try_run() {
            Ok(code) => code,
            Err(e) => {
                log!("FATAL: {}", e);
                e.exit_code()
            }
        }
    }

    fn try_run(&mut self) -> Result<i32, HostError> {
        let registration = self.register_window_class()?;
        let hwnd = self.create_invisible_window(&registration)?;
        self.apply_invisibility(hwnd);
        log!("Entering message loop");
        self.run_message_loop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::window_port::fake::FakeBackend;
    use crate::application::ports::RawMessage;
    use crate::domain::entities::{ProcedureState, WindowState};
    use crate::domain::value_objects::{is_offscreen, Rect};

    const WM_DESTROY: u32 = 0x0002;
    const WM_PAINT: u32 = 0x000F;
    const WM_CLOSE: u32 = 0x0010;
    const WM_TIMER: u32 = 0x0113;

    fn host() -> HiddenWindowHost<FakeBackend> {
        HiddenWindowHost::new(FakeBackend::new(), HostConfig::default())
    }

    fn setup(host: &mut HiddenWindowHost<FakeBackend>) -> WindowHandle {
        let reg = host.register_window_class().unwrap();
        let hwnd = host.create_invisible_window(&reg).unwrap();
        host.apply_invisibility(hwnd);
        hwnd
    }

    #[test]
    fn test_register_then_create_yields_handle() {
        let mut host = host();

        let reg = host.register_window_class().unwrap();
        assert_eq!(reg.class_name, "HiddenWindowClass");

        let hwnd = host.create_invisible_window(&reg).unwrap();
        assert_ne!(hwnd.raw(), 0);
        assert_eq!(host.backend().window_count(), 1);
    }

    #[test]
    fn test_double_registration_exits_with_one() {
        let mut host = host();
        host.backend_mut().preregister("HiddenWindowClass");

        assert!(matches!(
            host.register_window_class(),
            Err(HostError::Registration { .. })
        ));
        assert_eq!(host.run(), 1);
        assert_eq!(host.backend().window_count(), 0);
    }

    #[test]
    fn test_creation_failure_exits_with_one() {
        let mut host = host();
        host.backend_mut().fail_create = true;

        assert_eq!(host.run(), 1);
        assert_eq!(host.backend().window_count(), 0);
    }

    #[test]
    fn test_creation_spec() {
        let mut host = host();
        setup(&mut host);

        let spec = &host.backend().created[0];
        assert_eq!(spec.title, "Hidden Window");
        assert_eq!((spec.x, spec.y), (3000, 3000));
        assert_eq!((spec.width, spec.height), (1, 1));
        assert!(spec.ex_style.contains(ExStyle::TOOL_WINDOW));
        assert!(spec.ex_style.contains(ExStyle::NO_ACTIVATE));
    }

    #[test]
    fn test_apply_invisibility_sets_layered_and_alpha() {
        let mut host = host();
        let hwnd = setup(&mut host);

        let state = host.backend().window_state(hwnd);
        assert!(state.ex_style.contains(ExStyle::LAYERED));
        assert!(state.ex_style.contains(ExStyle::TOOL_WINDOW));
        assert_eq!(state.alpha, Some(1));
        assert!(state.is_invisible(1));
    }

    #[test]
    fn test_configured_alpha_is_applied() {
        let mut config = HostConfig::default();
        config.window.alpha = 5;
        let mut host = HiddenWindowHost::new(FakeBackend::new(), config);
        let hwnd = setup(&mut host);

        assert_eq!(host.backend().window_state(hwnd).alpha, Some(5));
    }

    #[test]
    fn test_refused_attributes_are_not_fatal() {
        let mut host = host();
        host.backend_mut().refuse_attributes = true;
        let hwnd = setup(&mut host);

        let state = host.backend().window_state(hwnd);
        assert!(!state.ex_style.contains(ExStyle::LAYERED));
        assert_eq!(state.alpha, None);

        host.backend_mut().post(RawMessage::new(Some(hwnd), WM_DESTROY));
        assert_eq!(host.run_message_loop(), Ok(0));
    }

    #[test]
    fn test_window_is_single_pixel_and_offscreen() {
        let layouts = [
            vec![Rect::new(0, 0, 1920, 1080)],
            vec![Rect::new(0, 0, 3840, 2160), Rect::new(-1920, 0, 0, 1080)],
            // Stacked layout that covers (3000, 3000)
            vec![Rect::new(0, 0, 3840, 2160), Rect::new(0, 2160, 3840, 4320)],
        ];

        for displays in layouts {
            let mut backend = FakeBackend::new();
            backend.displays = displays.clone();
            let mut host = HiddenWindowHost::new(backend, HostConfig::default());
            let hwnd = setup(&mut host);

            let state = host.backend().window_state(hwnd);
            assert!(state.is_single_pixel());
            assert!(is_offscreen(&state.bounds, &displays), "{:?}", displays);
        }
    }

    #[test]
    fn test_destroy_ends_loop_with_quit_code() {
        let mut host = host();
        let hwnd = setup(&mut host);

        host.backend_mut().post(RawMessage::new(Some(hwnd), WM_DESTROY));
        assert_eq!(host.run_message_loop(), Ok(0));
        assert_eq!(
            host.backend().procedure("HiddenWindowClass").map(|p| p.state()),
            Some(ProcedureState::Terminating)
        );
    }

    #[test]
    fn test_configured_quit_code() {
        let mut config = HostConfig::default();
        config.exit.quit_code = 3;
        let mut host = HiddenWindowHost::new(FakeBackend::new(), config);
        let hwnd = setup(&mut host);

        host.backend_mut().post(RawMessage::new(Some(hwnd), WM_DESTROY));
        assert_eq!(host.run_message_loop(), Ok(3));
    }

    #[test]
    fn test_other_messages_forwarded_without_side_effects() {
        let mut host = host();
        let hwnd = setup(&mut host);
        let before: WindowState = host.backend().window_state(hwnd);

        for id in [WM_PAINT, WM_CLOSE, WM_TIMER] {
            host.backend_mut().post(RawMessage::new(Some(hwnd), id));
        }
        host.backend_mut().post(RawMessage::new(Some(hwnd), WM_DESTROY));

        assert_eq!(host.run_message_loop(), Ok(0));
        assert_eq!(host.backend().forwarded, vec![WM_PAINT, WM_CLOSE, WM_TIMER]);
        assert_eq!(
            host.backend().translated,
            vec![WM_PAINT, WM_CLOSE, WM_TIMER, WM_DESTROY]
        );
        assert_eq!(host.backend().window_state(hwnd), before);
    }

    #[test]
    fn test_retrieval_error_exits_with_one() {
        let mut host = host();
        host.backend_mut().fail_get_message = true;

        assert_eq!(host.run(), 1);
    }

    #[test]
    fn test_end_to_end() {
        let mut host = host();
        // Destroy notification arrives once the loop is blocking
        let expected = WindowHandle::from_raw(0x101);
        host.backend_mut().post(RawMessage::new(expected, WM_DESTROY));

        assert_eq!(host.run(), 0);

        let spec = &host.backend().created[0];
        assert_eq!((spec.x, spec.y, spec.width, spec.height), (3000, 3000, 1, 1));
        let state = host.backend().window_state(expected.unwrap());
        assert!(state.is_invisible(1));
    }
}
