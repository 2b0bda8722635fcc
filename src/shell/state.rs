//! Process-lifetime state of the shell

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Uninitialized,
    ConsoleAttached,
    RuntimeInitialized,
    WindowCreated,
    PolicyApplied,
    EventLoopRunning,
    Terminated,
}

impl ShellState {
    /// Forward-only transitions. Any live state may jump to `Terminated`
    /// (the failure path); `Terminated` is final.
    pub fn can_transition_to(self, next: ShellState) -> bool {
        use ShellState::*;
        match (self, next) {
            (Terminated, _) => false,
            (_, Terminated) => true,
            (Uninitialized, ConsoleAttached)
            | (ConsoleAttached, RuntimeInitialized)
            | (RuntimeInitialized, WindowCreated)
            | (WindowCreated, PolicyApplied)
            | (PolicyApplied, EventLoopRunning) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ShellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShellState::Uninitialized => "uninitialized",
            ShellState::ConsoleAttached => "console_attached",
            ShellState::RuntimeInitialized => "runtime_initialized",
            ShellState::WindowCreated => "window_created",
            ShellState::PolicyApplied => "policy_applied",
            ShellState::EventLoopRunning => "event_loop_running",
            ShellState::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::ShellState::*;

    #[test]
    fn test_happy_path_is_linear() {
        let path = [
            Uninitialized,
            ConsoleAttached,
            RuntimeInitialized,
            WindowCreated,
            PolicyApplied,
            EventLoopRunning,
            Terminated,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_creation_failure_skips_to_terminated() {
        assert!(RuntimeInitialized.can_transition_to(Terminated));
        assert!(!RuntimeInitialized.can_transition_to(PolicyApplied));
    }

    #[test]
    fn test_no_backward_or_post_terminal_transitions() {
        assert!(!PolicyApplied.can_transition_to(WindowCreated));
        assert!(!EventLoopRunning.can_transition_to(EventLoopRunning));
        assert!(!Terminated.can_transition_to(Uninitialized));
        assert!(!Terminated.can_transition_to(Terminated));
    }
}
