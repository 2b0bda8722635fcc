//! Win32 implementation of [`WindowSystem`]

use std::ffi::c_void;

use windows::Win32::Foundation::{GetLastError, SetLastError, HWND, WIN32_ERROR};
use windows::Win32::Graphics::Gdi::{CreateRoundRectRgn, DeleteObject, SetWindowRgn, HGDIOBJ};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::System::Console::{AllocConsole, AttachConsole, ATTACH_PARENT_PROCESS};
use windows::Win32::System::Diagnostics::Debug::IsDebuggerPresent;
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowLongPtrW, SetWindowLongPtrW, SetWindowPos, GWL_EXSTYLE, GWL_STYLE, HWND_NOTOPMOST,
    HWND_TOPMOST, SET_WINDOW_POS_FLAGS, SWP_FRAMECHANGED, SWP_NOMOVE, SWP_NOSIZE,
    WINDOW_LONG_PTR_INDEX,
};

use super::{NativeWindowHandle, WindowSystem, ZOrderPlacement};
use crate::error::PlatformError;
use crate::shell::region::ClipRegion;
use crate::shell::style::{ExtendedStyleMask, StyleMask};

#[derive(Debug, Default)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

fn hwnd(window: NativeWindowHandle) -> HWND {
    HWND(window.as_raw() as *mut c_void)
}

fn call_failed(call: &'static str, err: windows::core::Error) -> PlatformError {
    PlatformError::CallFailed {
        call,
        message: err.to_string(),
    }
}

fn read_long(window: NativeWindowHandle, index: WINDOW_LONG_PTR_INDEX) -> u32 {
    // Style registers only use the low 32 bits.
    unsafe { GetWindowLongPtrW(hwnd(window), index) as u32 }
}

/// SetWindowLongPtrW returns the previous value, and a previous value of 0 is
/// legitimate, so failure is only detectable through the thread's last error.
fn write_long(
    window: NativeWindowHandle,
    index: WINDOW_LONG_PTR_INDEX,
    bits: u32,
) -> Result<(), PlatformError> {
    unsafe {
        SetLastError(WIN32_ERROR(0));
        let previous = SetWindowLongPtrW(hwnd(window), index, bits as isize);
        let last_error = GetLastError();
        if previous == 0 && last_error.0 != 0 {
            return Err(PlatformError::CallFailed {
                call: "SetWindowLongPtrW",
                message: format!("win32 error {}", last_error.0),
            });
        }
    }
    Ok(())
}

fn set_window_pos_flags(placement: ZOrderPlacement) -> SET_WINDOW_POS_FLAGS {
    let mut flags = SET_WINDOW_POS_FLAGS(0);
    if placement.keep_position {
        flags |= SWP_NOMOVE;
    }
    if placement.keep_size {
        flags |= SWP_NOSIZE;
    }
    if placement.refresh_frame {
        flags |= SWP_FRAMECHANGED;
    }
    flags
}

impl WindowSystem for Win32WindowSystem {
    fn attach_parent_console(&self) -> bool {
        unsafe { AttachConsole(ATTACH_PARENT_PROCESS) }.is_ok()
    }

    fn is_debugger_present(&self) -> bool {
        unsafe { IsDebuggerPresent() }.as_bool()
    }

    fn create_console(&self) -> Result<(), PlatformError> {
        // std resolves the standard handles on every write, so output goes to
        // the new console without reopening anything.
        unsafe { AllocConsole() }.map_err(|e| call_failed("AllocConsole", e))
    }

    fn initialize_runtime(&self) -> Result<(), PlatformError> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(|e| call_failed("CoInitializeEx", e))
    }

    fn uninitialize_runtime(&self) {
        unsafe { CoUninitialize() }
    }

    fn style(&self, window: NativeWindowHandle) -> StyleMask {
        StyleMask::from_bits(read_long(window, GWL_STYLE))
    }

    fn set_style(&self, window: NativeWindowHandle, style: StyleMask) -> Result<(), PlatformError> {
        write_long(window, GWL_STYLE, style.bits())
    }

    fn extended_style(&self, window: NativeWindowHandle) -> ExtendedStyleMask {
        ExtendedStyleMask::from_bits(read_long(window, GWL_EXSTYLE))
    }

    fn set_extended_style(
        &self,
        window: NativeWindowHandle,
        extended: ExtendedStyleMask,
    ) -> Result<(), PlatformError> {
        write_long(window, GWL_EXSTYLE, extended.bits())
    }

    fn set_z_order(
        &self,
        window: NativeWindowHandle,
        placement: ZOrderPlacement,
    ) -> Result<(), PlatformError> {
        let insert_after = if placement.topmost {
            HWND_TOPMOST
        } else {
            HWND_NOTOPMOST
        };
        unsafe {
            SetWindowPos(
                hwnd(window),
                Some(insert_after),
                0,
                0,
                0,
                0,
                set_window_pos_flags(placement),
            )
        }
        .map_err(|e| call_failed("SetWindowPos", e))
    }

    fn assign_clip_region(
        &self,
        window: NativeWindowHandle,
        region: &ClipRegion,
    ) -> Result<(), PlatformError> {
        let bounds = region.bounds();
        let radius = region.corner_radius();
        unsafe {
            let hrgn = CreateRoundRectRgn(
                bounds.left,
                bounds.top,
                bounds.right,
                bounds.bottom,
                radius,
                radius,
            );
            if hrgn.is_invalid() {
                return Err(PlatformError::CallFailed {
                    call: "CreateRoundRectRgn",
                    message: "region allocation failed".to_string(),
                });
            }
            if SetWindowRgn(hwnd(window), Some(hrgn), true) == 0 {
                // Not accepted, so the region is still ours to free.
                let _ = DeleteObject(HGDIOBJ(hrgn.0));
                return Err(PlatformError::CallFailed {
                    call: "SetWindowRgn",
                    message: "window rejected the region".to_string(),
                });
            }
        }
        Ok(())
    }
}
