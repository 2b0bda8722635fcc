//! Tauri (WebView2 on Windows) as the embedded surface host

use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use tauri::{
    App, Context, PhysicalPosition, PhysicalSize, RunEvent, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder, WindowEvent, Wry,
};

use super::{CreatedWindow, StartupArguments, SurfaceHost};
use crate::error::CreationError;
use crate::platform::NativeWindowHandle;
use crate::shell::geometry::{Size, WindowGeometry, WindowTitle};

pub const MAIN_WINDOW_LABEL: &str = "main";

/// Global the page reads its startup arguments from
pub const ARGUMENTS_GLOBAL: &str = "__DUCK_ARGS__";

pub struct TauriSurfaceHost {
    context: Option<Context<Wry>>,
    arguments: StartupArguments,
    app: Option<App<Wry>>,
}

impl TauriSurfaceHost {
    /// Host serving the bundled `dist/` content
    pub fn new() -> Self {
        Self::with_context(tauri::generate_context!())
    }

    pub fn with_context(context: Context<Wry>) -> Self {
        Self {
            context: Some(context),
            arguments: StartupArguments::default(),
            app: None,
        }
    }

    fn arguments_script(&self) -> Result<String, CreationError> {
        let json = serde_json::to_string(&self.arguments).map_err(|e| CreationError::Surface {
            message: format!("Failed to encode startup arguments: {}", e),
        })?;
        Ok(format!("window.{} = {};", ARGUMENTS_GLOBAL, json))
    }
}

impl Default for TauriSurfaceHost {
    fn default() -> Self {
        Self::new()
    }
}

fn surface_error(e: tauri::Error) -> CreationError {
    CreationError::Surface {
        message: e.to_string(),
    }
}

fn to_shell_size(size: PhysicalSize<u32>) -> Size {
    Size::new(
        i32::try_from(size.width).unwrap_or(i32::MAX),
        i32::try_from(size.height).unwrap_or(i32::MAX),
    )
}

fn native_handle(window: &WebviewWindow<Wry>) -> Result<NativeWindowHandle, CreationError> {
    let handle = window
        .window_handle()
        .map_err(|e| CreationError::MissingHandle {
            message: e.to_string(),
        })?;
    match handle.as_raw() {
        RawWindowHandle::Win32(win32) => Ok(NativeWindowHandle::from_raw(win32.hwnd.get())),
        other => Err(CreationError::MissingHandle {
            message: format!("not a Win32 window: {:?}", other),
        }),
    }
}

impl SurfaceHost for TauriSurfaceHost {
    fn set_entrypoint_arguments(&mut self, args: StartupArguments) {
        log::debug!("Forwarding {} startup argument(s) to the surface", args.len());
        self.arguments = args;
    }

    fn create_and_show(
        &mut self,
        title: &WindowTitle,
        geometry: WindowGeometry,
    ) -> Result<CreatedWindow, CreationError> {
        let context = self.context.take().ok_or(CreationError::AlreadyCreated)?;
        let app = tauri::Builder::default()
            .build(context)
            .map_err(|e| CreationError::Engine {
                message: e.to_string(),
            })?;

        let script = self.arguments_script()?;
        let window = WebviewWindowBuilder::new(
            &app,
            MAIN_WINDOW_LABEL,
            WebviewUrl::App("index.html".into()),
        )
        .title(title.as_str())
        .decorations(false)
        .resizable(false)
        .visible(false)
        .initialization_script(&script)
        .build()
        .map_err(surface_error)?;

        // Builder coordinates are logical; the widget is placed in physical
        // pixels so the clip region lines up with the real window edges.
        // Without decorations the inner size is the outer size.
        let origin = geometry.origin();
        let size = geometry.size();
        window
            .set_position(PhysicalPosition::new(origin.x, origin.y))
            .map_err(surface_error)?;
        window
            .set_size(PhysicalSize::new(size.width as u32, size.height as u32))
            .map_err(surface_error)?;
        let outer_size = to_shell_size(window.outer_size().map_err(surface_error)?);

        let handle = native_handle(&window)?;
        window.show().map_err(surface_error)?;
        self.app = Some(app);
        Ok(CreatedWindow { handle, outer_size })
    }

    fn run_message_loop(mut self) -> i32 {
        let Some(app) = self.app.take() else {
            log::error!("Message loop requested before the window was created");
            return 1;
        };

        app.run_return(|_app, event| match event {
            RunEvent::WindowEvent {
                label,
                event: WindowEvent::CloseRequested { .. },
                ..
            } => {
                log::info!("Close requested for window '{}'", label);
            }
            RunEvent::ExitRequested { code, .. } => {
                log::debug!("Exit requested (code: {:?})", code);
            }
            RunEvent::Exit => {
                log::debug!("Event loop exiting");
            }
            _ => {}
        })
    }
}
