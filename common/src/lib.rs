//! Platform-agnostic core of the sidebar status panel.
//!
//! This crate turns a telemetry snapshot into a draw list and never touches a
//! display, a clock or a config store. The host owns those:
//!
//! - [`telemetry`]: Snapshot model and wire-value decoding
//! - [`classify`]: Snapshot to severity-tagged status items
//! - [`status`]: Severity tiers and status items
//! - [`panel`]: Current panel state and repaint tracking
//! - [`render`]: Panel state to ordered draw commands
//! - [`input`]: Pointer hit testing
//! - [`colors`]: Palette and severity accent colors
//! - [`config`]: Layout constants
//! - [`styles`]: Fonts and text styles
//! - [`thresholds`]: Classification thresholds
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and allocates nothing: strings and
//! lists are fixed-capacity `heapless` types.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod classify;
pub mod colors;
pub mod config;
pub mod input;
pub mod panel;
pub mod render;
pub mod status;
pub mod styles;
pub mod telemetry;
pub mod thresholds;

// Re-export commonly used items
pub use input::{Action, PointerEvent, hit_test};
pub use panel::{Panel, PanelState};
pub use render::{DrawCmd, IconId, PlatformCaps, Renderer, Scene};
pub use status::{Severity, StatusItem};
pub use telemetry::{BatteryStatus, HardwareType, NetworkType, TelemetrySnapshot, ThermalStatus, TickContext};
