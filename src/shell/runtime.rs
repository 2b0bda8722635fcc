//! Scoped process-wide runtime context

use crate::error::PlatformError;
use crate::platform::WindowSystem;

/// What to do when the runtime cannot be initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeInitPolicy {
    /// Abort startup before any window exists
    #[default]
    FailFast,
    /// Log and continue without the runtime
    BestEffort,
}

/// Holds the runtime for as long as it lives and releases it on drop, so
/// every exit path (including early failure returns) uninitializes exactly
/// once.
pub struct RuntimeContext<'a, W: WindowSystem> {
    system: &'a W,
    acquired: bool,
}

impl<'a, W: WindowSystem> RuntimeContext<'a, W> {
    pub fn acquire(system: &'a W, policy: RuntimeInitPolicy) -> Result<Self, PlatformError> {
        match system.initialize_runtime() {
            Ok(()) => {
                log::debug!("Platform runtime initialized");
                Ok(Self {
                    system,
                    acquired: true,
                })
            }
            Err(e) if policy == RuntimeInitPolicy::BestEffort => {
                log::warn!("Platform runtime unavailable, continuing without it: {}", e);
                Ok(Self {
                    system,
                    acquired: false,
                })
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_acquired(&self) -> bool {
        self.acquired
    }
}

impl<W: WindowSystem> Drop for RuntimeContext<'_, W> {
    fn drop(&mut self) {
        if self.acquired {
            self.system.uninitialize_runtime();
            log::debug!("Platform runtime released");
        }
    }
}
