//! Error taxonomy for the widget shell
//!
//! Fatal errors end startup with a non-zero exit status. Everything that only
//! affects the cosmetic shell policy is a [`PlatformError`] that gets logged
//! and recorded in a `PolicyReport` instead of being propagated.

/// An OS windowing call that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("{call} failed: {message}")]
    CallFailed { call: &'static str, message: String },

    #[error("{call} is not available on this platform")]
    Unsupported { call: &'static str },
}

/// The embedded engine could not produce a window
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreationError {
    #[error("Rendering engine failed to start: {message}")]
    Engine { message: String },

    #[error("Rendering engine failed to create the window: {message}")]
    Surface { message: String },

    #[error("Native window handle unavailable: {message}")]
    MissingHandle { message: String },

    #[error("Window has already been created")]
    AlreadyCreated,
}

/// Errors that abort startup
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Platform runtime failed to initialize: {0}")]
    RuntimeInit(#[source] PlatformError),

    #[error("Window creation failed: {0}")]
    WindowCreation(#[from] CreationError),

    #[error("Invalid window geometry {width}x{height}: width and height must be positive")]
    InvalidGeometry { width: i32, height: i32 },

    #[error("Window at ({x}, {y}) with size {width}x{height} extends past the coordinate range")]
    GeometryOutOfRange {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("The widget shell is only supported on Windows")]
    UnsupportedPlatform,
}

impl ShellError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ShellError::RuntimeInit(_) => "SHELL_RUNTIME_INIT_FAILED",
            ShellError::WindowCreation(_) => "SHELL_WINDOW_CREATION_FAILED",
            ShellError::InvalidGeometry { .. } => "SHELL_INVALID_GEOMETRY",
            ShellError::GeometryOutOfRange { .. } => "SHELL_GEOMETRY_OUT_OF_RANGE",
            ShellError::UnsupportedPlatform => "SHELL_UNSUPPORTED_PLATFORM",
        }
    }
}
