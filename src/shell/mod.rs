//! The native window shell around the embedded surface

pub mod console;
pub mod controller;
#[cfg(test)]
pub(crate) mod fakes;
pub mod geometry;
pub mod region;
pub mod runtime;
pub mod state;
pub mod style;

pub use controller::{apply_shell_policy, PolicyReport, PolicyStep, WindowShellController};
pub use geometry::{Point, Rect, Size, WindowGeometry, WindowTitle};
pub use region::{ClipRegion, DEFAULT_CORNER_RADIUS};
pub use runtime::{RuntimeContext, RuntimeInitPolicy};
pub use state::ShellState;
