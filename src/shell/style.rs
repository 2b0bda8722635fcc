//! Window style bitmasks and the pure policies applied to them
//!
//! The bit values are the Win32 `WS_*` / `WS_EX_*` values, so a mask read from
//! `GetWindowLongPtrW` can be wrapped directly. Policies take a mask and return
//! the updated mask; they never touch a live window, which keeps them testable
//! on any host.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Plain window style (`GWL_STYLE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleMask(u32);

impl StyleMask {
    pub const MAXIMIZE_BOX: Self = Self(0x0001_0000);
    pub const MINIMIZE_BOX: Self = Self(0x0002_0000);
    pub const THICK_FRAME: Self = Self(0x0004_0000);
    pub const SYSTEM_MENU: Self = Self(0x0008_0000);
    /// Title bar (`WS_BORDER | WS_DLGFRAME`)
    pub const CAPTION: Self = Self(0x00C0_0000);
    pub const VISIBLE: Self = Self(0x1000_0000);

    /// A standard top-level window as the engine creates it
    pub const OVERLAPPED_WINDOW: Self = Self(
        Self::CAPTION.0
            | Self::SYSTEM_MENU.0
            | Self::THICK_FRAME.0
            | Self::MINIMIZE_BOX.0
            | Self::MAXIMIZE_BOX.0,
    );

    /// Every bit that makes the OS draw chrome
    pub const CHROME: Self = Self::OVERLAPPED_WINDOW;

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

/// Extended window style (`GWL_EXSTYLE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExtendedStyleMask(u32);

impl ExtendedStyleMask {
    pub const TOPMOST: Self = Self(0x0000_0008);
    /// Excluded from the taskbar and Alt+Tab
    pub const TOOL_WINDOW: Self = Self(0x0000_0080);
    pub const WINDOW_EDGE: Self = Self(0x0000_0100);
    pub const APP_WINDOW: Self = Self(0x0004_0000);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

macro_rules! mask_ops {
    ($mask:ident) => {
        impl BitOr for $mask {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl BitAnd for $mask {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl Not for $mask {
            type Output = Self;

            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl fmt::Display for $mask {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#010x}", self.0)
            }
        }
    };
}

mask_ops!(StyleMask);
mask_ops!(ExtendedStyleMask);

/// Both style registers of one window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowStyles {
    pub style: StyleMask,
    pub extended: ExtendedStyleMask,
}

impl WindowStyles {
    pub const fn new(style: StyleMask, extended: ExtendedStyleMask) -> Self {
        Self { style, extended }
    }

    /// True once both widget policies hold
    pub fn is_widget(&self) -> bool {
        self.extended.contains(ExtendedStyleMask::TOOL_WINDOW)
            && !self.style.intersects(StyleMask::CHROME)
    }
}

/// "hide-from-taskbar": sets the tool-window bit
pub fn hide_from_taskbar(extended: ExtendedStyleMask) -> ExtendedStyleMask {
    extended | ExtendedStyleMask::TOOL_WINDOW
}

/// "hide-chrome": clears caption, thick frame, min/max boxes and system menu
pub fn hide_chrome(style: StyleMask) -> StyleMask {
    style & !StyleMask::CHROME
}

/// Both policies applied to a style pair
pub fn widget_styles(styles: WindowStyles) -> WindowStyles {
    WindowStyles {
        style: hide_chrome(styles.style),
        extended: hide_from_taskbar(styles.extended),
    }
}
