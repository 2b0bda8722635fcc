//! Diagnostics for the widget shell
//!
//! Logging goes through `log`/`env_logger` to whatever console the process
//! managed to attach. Debug mode raises the default level and forces a console
//! even when no debugger is attached.
//!
//! # Activation
//! ```bash
//! DUCK_DEBUG=1 tamagotchi-duck
//! # finer control:
//! RUST_LOG=tamagotchi_duck_lib=trace tamagotchi-duck
//! ```

/// Environment switch for debug mode
pub const DEBUG_ENV: &str = "DUCK_DEBUG";

pub fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Default filter when RUST_LOG is unset
pub fn default_filter(debug_mode: bool) -> &'static str {
    if debug_mode {
        "debug"
    } else {
        "info"
    }
}

/// Install the global logger. `RUST_LOG` takes precedence over the default.
/// A second call is a no-op.
pub fn init_logging(debug_mode: bool) {
    let env = env_logger::Env::default().default_filter_or(default_filter(debug_mode));
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
