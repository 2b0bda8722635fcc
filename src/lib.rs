// Tamagotchi Duck widget shell:
// A borderless, always-on-top, taskbar-hidden window with rounded corners.
// Everything drawn inside it belongs to the embedded surface (the page in dist/).

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod platform;
pub mod shell;

use config::ShellConfig;
use error::ShellError;
use host::{StartupArguments, SurfaceHost};
use platform::WindowSystem;
use shell::WindowShellController;

/// Run the widget until its window is closed
pub fn run() -> Result<(), ShellError> {
    let config = ShellConfig::from_env();

    #[cfg(windows)]
    {
        let system = platform::win32::Win32WindowSystem::new();
        launch(
            &system,
            config,
            host::TauriSurfaceHost::new(),
            host::collect_startup_arguments(),
        )
    }

    #[cfg(not(windows))]
    {
        diagnostics::init_logging(config.debug_mode);
        let err = ShellError::UnsupportedPlatform;
        log::error!("[{}] {}", err.error_code(), err);
        Err(err)
    }
}

/// Full startup sequence against any OS surface and host
pub fn launch<W, H>(
    system: &W,
    config: ShellConfig,
    host: H,
    args: StartupArguments,
) -> Result<(), ShellError>
where
    W: WindowSystem,
    H: SurfaceHost,
{
    let mut controller = WindowShellController::new(system, config);
    let console = controller.attach_or_create_console();

    diagnostics::init_logging(controller.config().debug_mode);
    log::debug!("Console: {:?}", console);
    for warning in &controller.config().warnings {
        log::warn!("{}", warning);
    }

    controller.run(host, args)
}
