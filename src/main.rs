// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // u128->u32 timings, f32->i32 simulated readings
#![allow(clippy::cast_precision_loss)] // u32->f32 in metric averages
#![allow(clippy::cast_possible_wrap)] // u32->i32 pixel offsets within the panel
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Desktop simulator for the sidebar status panel.
//!
//! Drives the panel from simulated telemetry on an in-memory
//! `SimulatorDisplay`, the same `DrawTarget` the firmware-side code renders
//! into.
//!
//! # Modes
//!
//! | Build | Behaviour |
//! |-------|-----------|
//! | default | Headless: run `SIDEBAR_TICKS` ticks, write a PNG to `SIDEBAR_SCREENSHOT` |
//! | `--features window` | SDL window, ticking at ~2 Hz with keyboard and mouse input |
//!
//! # Window Controls
//!
//! | Input | Effect |
//! |-------|--------|
//! | Click settings icon | Logs an open-settings action |
//! | G | Toggle GPS fix |
//! | H | Toggle vehicle hardware |
//! | C | Toggle charging |
//! | N | Cycle network type |
//! | S | Toggle session started |
//! | P | Cycle ping state (fresh, stale, never) |
//! | R | Toggle the persisted `PrimeRedirected` flag |
//!
//! # Environment
//!
//! `SIDEBAR_ASSETS_DIR`, `SIDEBAR_PARAMS_DIR`, `SIDEBAR_SCREENSHOT` and
//! `SIDEBAR_TICKS` override the defaults in [`config`]. `RUST_LOG` sets the
//! log filter (default `info`).

mod app;
mod assets;
mod backend;
mod config;
mod params;
mod profiling;
mod telemetry;

use anyhow::Context;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics_simulator::SimulatorDisplay;
use sidebar_common::config::PANEL_AREA;

use app::App;
use assets::Assets;
use config::{HostConfig, PLATFORM_CAPS};
use params::Params;

fn main() -> anyhow::Result<()> {
    init_logging();

    let cfg = HostConfig::from_env();
    tracing::info!(
        assets = %cfg.assets_dir.display(),
        params = %cfg.params_dir.display(),
        "starting sidebar simulator"
    );

    let assets = Assets::load(&cfg.assets_dir).with_context(|| format!("loading icons from {}", cfg.assets_dir.display()))?;
    let params = Params::new(&cfg.params_dir);
    tracing::debug!(dir = %params.dir().display(), "params store opened");
    let app = App::new(assets, params, PLATFORM_CAPS);
    let display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(PANEL_AREA.size);

    run(app, display, &cfg)
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

/// Monotonic nanoseconds for tick `n`, offset so the first tick is never at zero.
fn tick_time_ns(n: u64) -> u64 { (n + 1).saturating_mul(config::TELEMETRY_TICK.as_nanos() as u64) }

// =============================================================================
// Headless Mode
// =============================================================================

#[cfg(not(feature = "window"))]
fn run(mut app: App, mut display: SimulatorDisplay<Rgb888>, cfg: &HostConfig) -> anyhow::Result<()> {
    use embedded_graphics_simulator::OutputSettingsBuilder;

    for n in 0..cfg.ticks {
        app.tick(tick_time_ns(n), &mut display);
    }
    app.metrics().log_summary();

    display
        .to_rgb_output_image(&OutputSettingsBuilder::new().build())
        .save_png(&cfg.screenshot)
        .with_context(|| format!("writing screenshot to {}", cfg.screenshot.display()))?;
    tracing::info!(path = %cfg.screenshot.display(), ticks = cfg.ticks, "screenshot saved");
    Ok(())
}

// =============================================================================
// Window Mode
// =============================================================================

#[cfg(feature = "window")]
fn run(mut app: App, mut display: SimulatorDisplay<Rgb888>, _cfg: &HostConfig) -> anyhow::Result<()> {
    use std::{
        thread,
        time::Instant,
    };

    use embedded_graphics::prelude::DrawTarget;
    use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorEvent, Window, sdl2::MouseButton};
    use sidebar_common::{PointerEvent, colors::BACKGROUND};

    use config::{FRAME_TIME, TELEMETRY_TICK, WINDOW_SCALE};

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Sidebar", &output_settings);

    // Initial clear so the window has something to show before the first tick
    display.clear(BACKGROUND).ok();
    window.update(&display);

    let mut ticks = 0u64;
    let mut last_tick: Option<Instant> = None;

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    app.metrics().log_summary();
                    return Ok(());
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    if let Some(cmd) = keys::sim_command(keycode) {
                        app.telemetry_mut().apply(cmd);
                    } else if keycode == keys::PRIME_REDIRECT_KEY
                        && let Err(e) = app.toggle_prime_redirected()
                    {
                        tracing::warn!(error = %e, "failed to write param");
                    }
                }
                SimulatorEvent::MouseButtonDown { mouse_btn: MouseButton::Left, point } => {
                    app.pointer(PointerEvent::Pressed(point));
                }
                SimulatorEvent::MouseButtonUp { mouse_btn: MouseButton::Left, point } => {
                    app.pointer(PointerEvent::Released(point));
                }
                _ => {}
            }
        }

        if last_tick.is_none_or(|t| t.elapsed() >= TELEMETRY_TICK) {
            last_tick = Some(Instant::now());
            app.tick(tick_time_ns(ticks), &mut display);
            ticks += 1;
        }

        window.update(&display);

        // Sleep to keep event polling at ~50 Hz
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

#[cfg(feature = "window")]
mod keys {
    use embedded_graphics_simulator::sdl2::Keycode;

    use crate::telemetry::SimCommand;

    pub const PRIME_REDIRECT_KEY: Keycode = Keycode::R;

    pub fn sim_command(keycode: Keycode) -> Option<SimCommand> {
        match keycode {
            Keycode::G => Some(SimCommand::ToggleGps),
            Keycode::H => Some(SimCommand::ToggleHardware),
            Keycode::C => Some(SimCommand::ToggleCharging),
            Keycode::N => Some(SimCommand::CycleNetwork),
            Keycode::S => Some(SimCommand::ToggleStarted),
            Keycode::P => Some(SimCommand::CyclePing),
            _ => None,
        }
    }
}
