//! Embedded rendering engine seam
//!
//! The shell never draws anything itself. A [`SurfaceHost`] owns the content,
//! creates the native window and pumps its event loop; the shell only reshapes
//! the window it hands back.

pub mod tauri_host;

use std::ffi::OsString;

use serde::Serialize;

use crate::error::CreationError;
use crate::platform::NativeWindowHandle;
use crate::shell::geometry::{Size, WindowGeometry, WindowTitle};

pub use tauri_host::TauriSurfaceHost;

/// Process arguments forwarded untouched to the embedded content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StartupArguments(Vec<String>);

impl StartupArguments {
    pub fn new(args: Vec<String>) -> Self {
        Self(args)
    }

    /// Lossy UTF-8 conversion, order preserved
    pub fn from_os_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self(
            args.into_iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Arguments of this process, without the executable path
pub fn collect_startup_arguments() -> StartupArguments {
    StartupArguments::from_os_args(std::env::args_os().skip(1))
}

/// A window as the engine actually created it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedWindow {
    pub handle: NativeWindowHandle,
    /// Outer size in physical pixels, frame included
    pub outer_size: Size,
}

pub trait SurfaceHost {
    /// Called once, before the window is created
    fn set_entrypoint_arguments(&mut self, args: StartupArguments);

    /// Create the window so that its outer rectangle is `geometry` in
    /// physical pixels, show it and report what was created
    fn create_and_show(
        &mut self,
        title: &WindowTitle,
        geometry: WindowGeometry,
    ) -> Result<CreatedWindow, CreationError>;

    /// Block dispatching events until the window is closed. Returns the
    /// engine's exit code.
    fn run_message_loop(self) -> i32
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_args_preserves_order() {
        let args = StartupArguments::from_os_args(
            ["--mood", "happy", ""].into_iter().map(OsString::from),
        );
        assert_eq!(args.as_slice(), ["--mood", "happy", ""]);
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_empty_arguments() {
        let args = StartupArguments::from_os_args(Vec::<OsString>::new());
        assert!(args.is_empty());
        assert_eq!(serde_json::to_string(&args).unwrap(), "[]");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let args = StartupArguments::new(vec!["a b".to_string(), "\"q\"".to_string()]);
        assert_eq!(serde_json::to_string(&args).unwrap(), r#"["a b","\"q\""]"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_is_replaced() {
        use std::os::unix::ffi::OsStringExt;

        let args = StartupArguments::from_os_args([OsString::from_vec(vec![b'd', 0xff])]);
        assert_eq!(args.as_slice(), ["d\u{fffd}"]);
    }
}
