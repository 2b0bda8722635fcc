//! OS windowing surface consumed by the shell
//!
//! The controller only talks to the OS through [`WindowSystem`], so the whole
//! startup sequence can run against a recording fake in tests.

#[cfg(windows)]
pub mod win32;

use crate::error::PlatformError;
use crate::shell::region::ClipRegion;
use crate::shell::style::{ExtendedStyleMask, StyleMask};

/// Opaque OS window reference (an `HWND` on Windows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeWindowHandle(isize);

impl NativeWindowHandle {
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> isize {
        self.0
    }
}

/// A z-order change, with which parts of the window position it may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZOrderPlacement {
    /// Join (or leave) the always-on-top band
    pub topmost: bool,
    pub keep_position: bool,
    pub keep_size: bool,
    /// Recompute the non-client area after style changes
    pub refresh_frame: bool,
}

impl ZOrderPlacement {
    /// Always on top, same place, same size
    pub const ALWAYS_ON_TOP: Self = Self {
        topmost: true,
        keep_position: true,
        keep_size: true,
        refresh_frame: true,
    };
}

/// The OS calls the shell needs: console, process runtime, style registers,
/// z-order and window region.
pub trait WindowSystem {
    /// Attach to the console of the parent process. False when there is none.
    fn attach_parent_console(&self) -> bool;

    fn is_debugger_present(&self) -> bool;

    /// Allocate a fresh console and route stdout/stderr to it
    fn create_console(&self) -> Result<(), PlatformError>;

    /// Process-wide runtime (COM, single-threaded apartment)
    fn initialize_runtime(&self) -> Result<(), PlatformError>;

    /// Must be called once for every successful `initialize_runtime`
    fn uninitialize_runtime(&self);

    fn style(&self, window: NativeWindowHandle) -> StyleMask;

    fn set_style(&self, window: NativeWindowHandle, style: StyleMask) -> Result<(), PlatformError>;

    fn extended_style(&self, window: NativeWindowHandle) -> ExtendedStyleMask;

    fn set_extended_style(
        &self,
        window: NativeWindowHandle,
        extended: ExtendedStyleMask,
    ) -> Result<(), PlatformError>;

    /// Change the window's z-order band. Position and size are only
    /// preserved when `placement` asks for it.
    fn set_z_order(
        &self,
        window: NativeWindowHandle,
        placement: ZOrderPlacement,
    ) -> Result<(), PlatformError>;

    /// Build an OS region from `region` and hand it to the window. Once the
    /// assignment succeeds the OS owns the region.
    fn assign_clip_region(
        &self,
        window: NativeWindowHandle,
        region: &ClipRegion,
    ) -> Result<(), PlatformError>;
}

