//! Window shell controller
//!
//! Turns the plain window the surface host creates into the widget: no
//! chrome, not in the taskbar, always on top, rounded corners. Then blocks in
//! the host's event loop until the window is closed.
//!
//! Sequence: console -> runtime -> create -> policy -> event loop -> shutdown.
//! Window creation failure skips straight to shutdown with an error; the
//! runtime context is released on every path by its guard.

use crate::config::ShellConfig;
use crate::error::{PlatformError, ShellError};
use crate::host::{CreatedWindow, StartupArguments, SurfaceHost};
use crate::platform::{NativeWindowHandle, WindowSystem, ZOrderPlacement};

use super::console::{self, ConsoleOutcome};
use super::geometry::Size;
use super::region::ClipRegion;
use super::runtime::RuntimeContext;
use super::state::ShellState;
use super::style::{self, WindowStyles};

/// One mutation of the shell policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyStep {
    HideFromTaskbar,
    HideChrome,
    AlwaysOnTop,
    RoundCorners,
}

/// Result of applying the shell policy to a window. Mutation failures are
/// collected here and logged, never propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyReport {
    pub before: WindowStyles,
    pub requested: WindowStyles,
    pub region: ClipRegion,
    pub failures: Vec<(PolicyStep, PlatformError)>,
}

impl PolicyReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Apply the widget policy to `window`, a window of `size`.
///
/// Each style change is a read-modify-write of the live register, so applying
/// the policy again leaves the masks unchanged.
pub fn apply_shell_policy<W: WindowSystem>(
    system: &W,
    window: NativeWindowHandle,
    size: Size,
    corner_radius: i32,
) -> PolicyReport {
    let mut failures = Vec::new();
    let mut record = |step: PolicyStep, result: Result<(), PlatformError>| {
        if let Err(e) = result {
            log::warn!("Shell policy step {:?} failed: {}", step, e);
            failures.push((step, e));
        }
    };

    let before = WindowStyles::new(system.style(window), system.extended_style(window));
    let requested = style::widget_styles(before);

    log::debug!("Extended style {} -> {}", before.extended, requested.extended);
    record(
        PolicyStep::HideFromTaskbar,
        system.set_extended_style(window, requested.extended),
    );

    log::debug!("Style {} -> {}", before.style, requested.style);
    record(PolicyStep::HideChrome, system.set_style(window, requested.style));

    record(
        PolicyStep::AlwaysOnTop,
        system.set_z_order(window, ZOrderPlacement::ALWAYS_ON_TOP),
    );

    let region = ClipRegion::rounded(size, corner_radius);
    log::debug!(
        "Clip region {:?} radius {}",
        region.bounds(),
        region.corner_radius()
    );
    record(
        PolicyStep::RoundCorners,
        system.assign_clip_region(window, &region),
    );

    PolicyReport {
        before,
        requested,
        region,
        failures,
    }
}

pub struct WindowShellController<'a, W: WindowSystem> {
    system: &'a W,
    config: ShellConfig,
    state: ShellState,
    history: Vec<ShellState>,
}

impl<'a, W: WindowSystem> WindowShellController<'a, W> {
    pub fn new(system: &'a W, config: ShellConfig) -> Self {
        Self {
            system,
            config,
            state: ShellState::Uninitialized,
            history: vec![ShellState::Uninitialized],
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Every state visited so far, in order
    pub fn history(&self) -> &[ShellState] {
        &self.history
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Out-of-order transitions are ignored
    fn transition(&mut self, next: ShellState) {
        if !self.state.can_transition_to(next) {
            log::error!("Invalid shell transition {} -> {}", self.state, next);
            return;
        }
        log::debug!("Shell state {} -> {}", self.state, next);
        self.state = next;
        self.history.push(next);
    }

    /// First step of startup. Runs before logging is initialized, so it must
    /// not rely on log output.
    pub fn attach_or_create_console(&mut self) -> ConsoleOutcome {
        let outcome = console::attach_or_create_console(self.system, self.config.debug_mode);
        self.transition(ShellState::ConsoleAttached);
        outcome
    }

    fn initialize_runtime(&mut self) -> Result<RuntimeContext<'a, W>, ShellError> {
        let context = RuntimeContext::acquire(self.system, self.config.runtime_policy)
            .map_err(ShellError::RuntimeInit)?;
        if !context.is_acquired() {
            log::info!("Starting without the platform runtime");
        }
        self.transition(ShellState::RuntimeInitialized);
        Ok(context)
    }

    fn create_shell_window<H: SurfaceHost>(
        &mut self,
        host: &mut H,
        args: StartupArguments,
    ) -> Result<CreatedWindow, ShellError> {
        host.set_entrypoint_arguments(args);
        let created = host.create_and_show(&self.config.title, self.config.geometry)?;
        log::info!(
            "Created window '{}' at {:?} ({:#x})",
            self.config.title,
            self.config.geometry.bounds(),
            created.handle.as_raw()
        );
        if created.outer_size != self.config.geometry.size() {
            log::warn!(
                "Window outer size {:?} differs from requested {:?}",
                created.outer_size,
                self.config.geometry.size()
            );
        }
        self.transition(ShellState::WindowCreated);
        Ok(created)
    }

    /// The region is cut from the window as created, so it always covers
    /// the whole window even if the engine did not honour the requested size.
    fn apply_policy(&mut self, window: CreatedWindow) -> PolicyReport {
        let report = apply_shell_policy(
            self.system,
            window.handle,
            window.outer_size,
            self.config.corner_radius,
        );
        if report.is_complete() {
            log::info!("Shell policy applied");
        } else {
            log::warn!(
                "Shell policy applied with {} failed step(s)",
                report.failures.len()
            );
        }
        self.transition(ShellState::PolicyApplied);
        report
    }

    fn run_event_loop<H: SurfaceHost>(&mut self, host: H) {
        self.transition(ShellState::EventLoopRunning);
        let code = host.run_message_loop();
        log::info!("Event loop finished (engine exit code {})", code);
    }

    /// Runtime, window, policy and event loop. Returns once the window has
    /// been closed, or with the error that stopped startup. The runtime
    /// context is released before this returns on every path.
    ///
    /// Attaches the console first if the caller has not already done so.
    /// A controller that has already terminated does nothing.
    pub fn run<H: SurfaceHost>(
        &mut self,
        host: H,
        args: StartupArguments,
    ) -> Result<(), ShellError> {
        match self.state {
            ShellState::Uninitialized => {
                self.attach_or_create_console();
            }
            ShellState::ConsoleAttached => {}
            state => {
                log::warn!("Shell already started (state: {}), ignoring run", state);
                return Ok(());
            }
        }
        let result = self.run_until_closed(host, args);
        if let Err(e) = &result {
            log::error!("[{}] {}", e.error_code(), e);
        }
        self.transition(ShellState::Terminated);
        result
    }

    fn run_until_closed<H: SurfaceHost>(
        &mut self,
        mut host: H,
        args: StartupArguments,
    ) -> Result<(), ShellError> {
        let _runtime = self.initialize_runtime()?;
        let window = self.create_shell_window(&mut host, args)?;
        self.apply_policy(window);
        self.run_event_loop(host);
        Ok(())
    }
}
