//! Host configuration.
//!
//! Timing and defaults are compile-time constants. Host paths and the
//! headless run length can be overridden from the environment; [`HostConfig`]
//! resolves them once at startup.

use std::{env, path::PathBuf, time::Duration};

use sidebar_common::PlatformCaps;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Interval between telemetry ticks (~2 Hz).
pub const TELEMETRY_TICK: Duration = Duration::from_millis(500);

/// Event polling interval in window mode (~50 Hz).
#[cfg_attr(not(feature = "window"), allow(dead_code))]
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Metrics are logged every this many ticks.
pub const METRICS_LOG_EVERY: u64 = 20;

const _: () = assert!(FRAME_TIME.as_millis() < TELEMETRY_TICK.as_millis());

// =============================================================================
// Platform
// =============================================================================

/// The desktop host has room for the Wi-Fi address under the gauge.
pub const PLATFORM_CAPS: PlatformCaps = PlatformCaps { shows_wifi_address: true };

/// Persisted key set when the device was redirected to the Prime signup.
pub const PRIME_REDIRECTED_KEY: &str = "PrimeRedirected";

/// Window pixel scale (the panel is taller than most laptop screens at 1:1).
#[cfg_attr(not(feature = "window"), allow(dead_code))]
pub const WINDOW_SCALE: u32 = 1;

// =============================================================================
// Environment Overrides
// =============================================================================

pub const ASSETS_DIR_ENV: &str = "SIDEBAR_ASSETS_DIR";
pub const PARAMS_DIR_ENV: &str = "SIDEBAR_PARAMS_DIR";
pub const SCREENSHOT_ENV: &str = "SIDEBAR_SCREENSHOT";
pub const TICKS_ENV: &str = "SIDEBAR_TICKS";

const DEFAULT_ASSETS_DIR: &str = "assets/images";
const DEFAULT_PARAMS_DIR: &str = "params";
const DEFAULT_SCREENSHOT: &str = "sidebar.png";
const DEFAULT_TICKS: u64 = 12;

/// Startup configuration resolved from defaults and environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub assets_dir: PathBuf,
    pub params_dir: PathBuf,
    /// Headless output path.
    pub screenshot: PathBuf,
    /// Ticks to run in headless mode before saving the screenshot.
    pub ticks: u64,
}

impl HostConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self { Self::from_lookup(|key| env::var(key).ok()) }

    /// Resolve the config from an arbitrary variable lookup.
    ///
    /// An unparsable tick count falls back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key, default: &str| lookup(key).filter(|v| !v.is_empty()).map_or_else(|| PathBuf::from(default), PathBuf::from);

        let ticks = match lookup(TICKS_ENV) {
            None => DEFAULT_TICKS,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_TICKS, "ignoring invalid {TICKS_ENV}");
                DEFAULT_TICKS
            }),
        };

        Self {
            assets_dir: path(ASSETS_DIR_ENV, DEFAULT_ASSETS_DIR),
            params_dir: path(PARAMS_DIR_ENV, DEFAULT_PARAMS_DIR),
            screenshot: path(SCREENSHOT_ENV, DEFAULT_SCREENSHOT),
            ticks,
        }
    }
}
