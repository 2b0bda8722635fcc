//! Best-effort diagnostics console

use crate::platform::WindowSystem;

/// How the process ended up with (or without) a console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOutcome {
    /// Launched from a terminal
    AttachedToParent,
    /// Fresh console for a debugger or debug mode
    Created,
    /// No console; output is discarded
    Unavailable,
}

/// Attach to the parent's console, or create one when a debugger is attached
/// (or `force_create` is set). Never fails; a missing console only means
/// diagnostics are not visible.
pub fn attach_or_create_console<W: WindowSystem>(system: &W, force_create: bool) -> ConsoleOutcome {
    if system.attach_parent_console() {
        return ConsoleOutcome::AttachedToParent;
    }
    if !(force_create || system.is_debugger_present()) {
        return ConsoleOutcome::Unavailable;
    }
    match system.create_console() {
        Ok(()) => ConsoleOutcome::Created,
        // The logger is not up yet, so there is nowhere to report this.
        Err(_) => ConsoleOutcome::Unavailable,
    }
}
