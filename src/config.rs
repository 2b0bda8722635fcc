//! Shell configuration
//!
//! Defaults reproduce the reference widget. A couple of environment variables
//! can adjust it; nothing is read from or written to disk.

use crate::diagnostics;
use crate::shell::geometry::{Point, WindowGeometry, WindowTitle};
use crate::shell::region::DEFAULT_CORNER_RADIUS;
use crate::shell::runtime::RuntimeInitPolicy;

/// Relocates the widget, formatted as `x,y`
pub const ORIGIN_ENV: &str = "DUCK_WINDOW_ORIGIN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub title: WindowTitle,
    pub geometry: WindowGeometry,
    pub corner_radius: i32,
    pub runtime_policy: RuntimeInitPolicy,
    /// Force a diagnostics console and verbose logging
    pub debug_mode: bool,
    /// Overrides that were present but unusable, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: WindowTitle::default(),
            geometry: WindowGeometry::default(),
            corner_radius: DEFAULT_CORNER_RADIUS,
            runtime_policy: RuntimeInitPolicy::FailFast,
            debug_mode: false,
            warnings: Vec::new(),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides resolved through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            debug_mode: lookup(diagnostics::DEBUG_ENV)
                .map(|v| diagnostics::is_truthy(&v))
                .unwrap_or(false),
            ..Self::default()
        };

        if let Some(raw) = lookup(ORIGIN_ENV) {
            let current = config.geometry;
            match parse_origin(&raw).map(|origin| current.moved_to(origin)) {
                Some(Ok(geometry)) => config.geometry = geometry,
                Some(Err(e)) => config
                    .warnings
                    .push(format!("Ignoring {}={:?}: {}", ORIGIN_ENV, raw, e)),
                None => config.warnings.push(format!(
                    "Ignoring {}={:?}: expected \"x,y\"",
                    ORIGIN_ENV, raw
                )),
            }
        }

        config
    }
}

/// Parse `x,y` with optional surrounding whitespace
pub fn parse_origin(raw: &str) -> Option<Point> {
    let (x, y) = raw.split_once(',')?;
    let x = x.trim().parse().ok()?;
    let y = y.trim().parse().ok()?;
    Some(Point::new(x, y))
}
