//! Recording fakes of the OS and the surface host for controller tests

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};

use crate::error::{CreationError, PlatformError};
use crate::host::{CreatedWindow, StartupArguments, SurfaceHost};
use crate::platform::{NativeWindowHandle, WindowSystem, ZOrderPlacement};

use super::geometry::{Point, Rect, Size, WindowGeometry, WindowTitle};
use super::region::ClipRegion;
use super::style::{ExtendedStyleMask, StyleMask, WindowStyles};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeWindow {
    pub title: String,
    pub bounds: Rect,
    pub styles: WindowStyles,
    pub topmost: bool,
    pub last_placement: Option<ZOrderPlacement>,
    pub region: Option<ClipRegion>,
}

#[derive(Default)]
pub struct FakeWindowSystem {
    parent_console: bool,
    debugger: bool,
    runtime_fails: bool,
    failing: HashSet<&'static str>,
    runtime_inits: Cell<usize>,
    runtime_releases: Cell<usize>,
    consoles_created: Cell<usize>,
    dispatched: Cell<usize>,
    next_handle: Cell<isize>,
    windows: RefCell<BTreeMap<isize, FakeWindow>>,
    arguments: RefCell<Option<StartupArguments>>,
    calls: RefCell<Vec<String>>,
}

impl FakeWindowSystem {
    pub fn new() -> Self {
        Self {
            next_handle: Cell::new(0x100),
            ..Self::default()
        }
    }

    pub fn with_parent_console(mut self) -> Self {
        self.parent_console = true;
        self
    }

    pub fn with_debugger(mut self) -> Self {
        self.debugger = true;
        self
    }

    pub fn with_runtime_failure(mut self) -> Self {
        self.runtime_fails = true;
        self
    }

    /// Make the named `WindowSystem` call return an error
    pub fn failing_call(mut self, call: &'static str) -> Self {
        self.failing.insert(call);
        self
    }

    pub fn runtime_inits(&self) -> usize {
        self.runtime_inits.get()
    }

    pub fn runtime_releases(&self) -> usize {
        self.runtime_releases.get()
    }

    pub fn consoles_created(&self) -> usize {
        self.consoles_created.get()
    }

    pub fn dispatched_events(&self) -> usize {
        self.dispatched.get()
    }

    pub fn forwarded_arguments(&self) -> Option<StartupArguments> {
        self.arguments.borrow().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// A standard decorated top-level window, as an engine would create it
    pub fn open_window(&self, title: &str, geometry: WindowGeometry) -> NativeWindowHandle {
        self.open_window_with_bounds(title, geometry.bounds())
    }

    fn open_window_with_bounds(&self, title: &str, bounds: Rect) -> NativeWindowHandle {
        let raw = self.next_handle.get();
        self.next_handle.set(raw + 0x10);
        self.windows.borrow_mut().insert(
            raw,
            FakeWindow {
                title: title.to_string(),
                bounds,
                styles: WindowStyles::new(
                    StyleMask::OVERLAPPED_WINDOW | StyleMask::VISIBLE,
                    ExtendedStyleMask::WINDOW_EDGE | ExtendedStyleMask::APP_WINDOW,
                ),
                topmost: false,
                last_placement: None,
                region: None,
            },
        );
        NativeWindowHandle::from_raw(raw)
    }

    pub fn window(&self, handle: NativeWindowHandle) -> Option<FakeWindow> {
        self.windows.borrow().get(&handle.as_raw()).cloned()
    }

    pub fn only_window(&self) -> FakeWindow {
        let windows = self.windows.borrow();
        assert_eq!(windows.len(), 1, "expected exactly one window");
        windows.values().next().cloned().unwrap()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }

    fn check(&self, call: &'static str) -> Result<(), PlatformError> {
        self.record(call);
        if self.failing.contains(call) {
            return Err(PlatformError::CallFailed {
                call,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    fn update<F>(&self, call: &'static str, window: NativeWindowHandle, f: F) -> Result<(), PlatformError>
    where
        F: FnOnce(&mut FakeWindow),
    {
        self.check(call)?;
        let mut windows = self.windows.borrow_mut();
        let entry = windows
            .get_mut(&window.as_raw())
            .ok_or_else(|| PlatformError::CallFailed {
                call,
                message: "invalid window handle".to_string(),
            })?;
        f(entry);
        Ok(())
    }
}

impl WindowSystem for FakeWindowSystem {
    fn attach_parent_console(&self) -> bool {
        self.record("attach_parent_console");
        self.parent_console
    }

    fn is_debugger_present(&self) -> bool {
        self.debugger
    }

    fn create_console(&self) -> Result<(), PlatformError> {
        self.check("create_console")?;
        self.consoles_created.set(self.consoles_created.get() + 1);
        Ok(())
    }

    fn initialize_runtime(&self) -> Result<(), PlatformError> {
        self.check("initialize_runtime")?;
        if self.runtime_fails {
            return Err(PlatformError::CallFailed {
                call: "initialize_runtime",
                message: "apartment mode mismatch".to_string(),
            });
        }
        self.runtime_inits.set(self.runtime_inits.get() + 1);
        Ok(())
    }

    fn uninitialize_runtime(&self) {
        self.record("uninitialize_runtime");
        self.runtime_releases.set(self.runtime_releases.get() + 1);
    }

    fn style(&self, window: NativeWindowHandle) -> StyleMask {
        self.window(window)
            .map(|w| w.styles.style)
            .unwrap_or_default()
    }

    fn set_style(&self, window: NativeWindowHandle, style: StyleMask) -> Result<(), PlatformError> {
        self.update("set_style", window, |w| w.styles.style = style)
    }

    fn extended_style(&self, window: NativeWindowHandle) -> ExtendedStyleMask {
        self.window(window)
            .map(|w| w.styles.extended)
            .unwrap_or_default()
    }

    fn set_extended_style(
        &self,
        window: NativeWindowHandle,
        extended: ExtendedStyleMask,
    ) -> Result<(), PlatformError> {
        self.update("set_extended_style", window, |w| w.styles.extended = extended)
    }

    /// Mirrors SetWindowPos called with x = y = cx = cy = 0: whatever the
    /// placement does not keep is overwritten with zero.
    fn set_z_order(
        &self,
        window: NativeWindowHandle,
        placement: ZOrderPlacement,
    ) -> Result<(), PlatformError> {
        self.update("set_z_order", window, |w| {
            let size = w.bounds.size();
            let mut origin = Point::new(w.bounds.left, w.bounds.top);
            if !placement.keep_position {
                origin = Point::new(0, 0);
            }
            let size = if placement.keep_size {
                size
            } else {
                Size::new(0, 0)
            };
            w.bounds = Rect::from_origin_size(origin, size);
            w.topmost = placement.topmost;
            w.last_placement = Some(placement);
        })
    }

    fn assign_clip_region(
        &self,
        window: NativeWindowHandle,
        region: &ClipRegion,
    ) -> Result<(), PlatformError> {
        self.update("assign_clip_region", window, |w| w.region = Some(*region))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeEvent {
    Paint,
    Input,
    Close,
}

pub struct FakeSurfaceHost<'a> {
    system: &'a FakeWindowSystem,
    events: Vec<FakeEvent>,
    failure: Option<CreationError>,
    frame: Size,
}

impl<'a> FakeSurfaceHost<'a> {
    pub fn new(system: &'a FakeWindowSystem) -> Self {
        Self {
            system,
            events: vec![FakeEvent::Close],
            failure: None,
            frame: Size::new(0, 0),
        }
    }

    pub fn with_events(mut self, events: Vec<FakeEvent>) -> Self {
        self.events = events;
        self
    }

    /// Engine that adds `frame` to the requested size, like a decorated or
    /// DPI-scaled window would
    pub fn with_frame(mut self, frame: Size) -> Self {
        self.frame = frame;
        self
    }

    pub fn failing(mut self, error: CreationError) -> Self {
        self.failure = Some(error);
        self
    }
}

impl SurfaceHost for FakeSurfaceHost<'_> {
    fn set_entrypoint_arguments(&mut self, args: StartupArguments) {
        self.system.record("set_entrypoint_arguments");
        *self.system.arguments.borrow_mut() = Some(args);
    }

    fn create_and_show(
        &mut self,
        title: &WindowTitle,
        geometry: WindowGeometry,
    ) -> Result<CreatedWindow, CreationError> {
        self.system.record("create_and_show");
        if let Some(error) = self.failure.take() {
            return Err(error);
        }
        let requested = geometry.size();
        let outer_size = Size::new(
            requested.width + self.frame.width,
            requested.height + self.frame.height,
        );
        let bounds = Rect::from_origin_size(geometry.origin(), outer_size);
        let handle = self.system.open_window_with_bounds(title.as_str(), bounds);
        Ok(CreatedWindow { handle, outer_size })
    }

    fn run_message_loop(self) -> i32 {
        self.system.record("run_message_loop");
        for event in self.events {
            self.system.dispatched.set(self.system.dispatched.get() + 1);
            if event == FakeEvent::Close {
                return 0;
            }
        }
        0
    }
}
