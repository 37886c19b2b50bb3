//! Hidden Window - runs an invisible, off-screen window until destroyed
//!
//! No arguments. Exits with 1 if setup fails, otherwise with the code carried
//! by the quit message.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use hidden_window::domain::errors::FAILURE_EXIT_CODE;
use hidden_window::log;
use hidden_window::shared::config::{HostConfig, LoadedConfig};

fn main() {
    let LoadedConfig {
        config,
        source,
        error,
    } = HostConfig::load();

    // Initialize logging first
    if config.log.enabled {
        log::init(&config.log.resolved_path());
    }
    log!("main() starting");

    match (source, error) {
        (Some(path), None) => log!("Config loaded from {:?}", path),
        (Some(path), Some(e)) => log!("Failed to load config {:?}: {}, using defaults", path, e),
        _ => log!("No config file found, using defaults"),
    }

    let code = run(config);

    log!("Exiting with code {}", code);
    log::shutdown();
    std::process::exit(code);
}

#[cfg(target_os = "windows")]
fn run(config: HostConfig) -> i32 {
    use hidden_window::application::services::HiddenWindowHost;
    use hidden_window::platform::Win32Backend;

    let backend = match Win32Backend::new() {
        Ok(b) => b,
        Err(e) => {
            log!("FATAL: Failed to get module handle: {:?}", e);
            return FAILURE_EXIT_CODE;
        }
    };

    HiddenWindowHost::new(backend, config).run()
}

#[cfg(not(target_os = "windows"))]
fn run(_config: HostConfig) -> i32 {
    log!("FATAL: hidden windows are only supported on Windows");
    eprintln!("hidden_window: this platform is not supported");
    FAILURE_EXIT_CODE
}
