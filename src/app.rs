//! Host application: wires telemetry, panel, renderer and display together.
//!
//! Each tick reads the persisted prime-redirect flag, classifies a snapshot
//! and, only when the panel state changed, paints a scene and draws it.
//! Pointer events go straight to hit testing and never touch panel state.

use std::time::Instant;

use embedded_graphics::{pixelcolor::Rgb888, prelude::DrawTarget};
use sidebar_common::{Action, Panel, PlatformCaps, PointerEvent, Renderer, TelemetrySnapshot, TickContext, hit_test};

use crate::{
    assets::Assets,
    backend::draw_scene,
    config::{METRICS_LOG_EVERY, PRIME_REDIRECTED_KEY},
    params::Params,
    profiling::PanelMetrics,
    telemetry::SimulatedTelemetry,
};

pub struct App {
    panel: Panel,
    renderer: Renderer,
    assets: Assets,
    params: Params,
    telemetry: SimulatedTelemetry,
    metrics: PanelMetrics,
}

impl App {
    pub fn new(assets: Assets, params: Params, caps: PlatformCaps) -> Self {
        Self {
            panel: Panel::new(),
            renderer: Renderer::new(caps),
            assets,
            params,
            telemetry: SimulatedTelemetry::new(),
            metrics: PanelMetrics::new(),
        }
    }

    /// Run one tick with the next simulated snapshot. Returns `true` if the display was redrawn.
    pub fn tick<D>(&mut self, now_ns: u64, target: &mut D) -> bool
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let snapshot = self.telemetry.next_snapshot(now_ns);
        self.apply_snapshot(&snapshot, now_ns, target)
    }

    /// Classify `snapshot` and redraw `target` if the panel changed.
    pub fn apply_snapshot<D>(&mut self, snapshot: &TelemetrySnapshot, now_ns: u64, target: &mut D) -> bool
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let ctx = TickContext { now_ns, prime_redirected: self.params.get_bool(PRIME_REDIRECTED_KEY) };

        let repaint = self.panel.update(snapshot, &ctx);
        if repaint && let Some(state) = self.panel.state() {
            let paint_start = Instant::now();
            let scene = self.renderer.paint(state);
            draw_scene(target, &scene, &self.assets);
            self.metrics.record_paint(paint_start.elapsed());
            tracing::debug!(
                commands = scene.len(),
                thermal = ?state.thermal.severity(),
                hardware = ?state.hardware.severity(),
                connectivity = ?state.connectivity.severity(),
                "repainted"
            );
        }
        self.metrics.record_tick(repaint);

        if self.metrics.ticks % METRICS_LOG_EVERY == 0 {
            self.metrics.log_summary();
        }
        repaint
    }

    /// Hit-test a pointer event against the last painted settings button.
    #[cfg_attr(not(feature = "window"), allow(dead_code))]
    pub fn pointer(&mut self, event: PointerEvent) -> Option<Action> {
        let action = hit_test(event, self.renderer.settings_button());
        if let Some(action) = action {
            self.metrics.inc_settings_opens();
            tracing::info!(?action, "settings requested");
        }
        action
    }

    /// Flip the persisted prime-redirect flag.
    #[cfg_attr(not(feature = "window"), allow(dead_code))]
    pub fn toggle_prime_redirected(&mut self) -> std::io::Result<bool> {
        let value = !self.params.get_bool(PRIME_REDIRECTED_KEY);
        self.params.put_bool(PRIME_REDIRECTED_KEY, value)?;
        tracing::info!(prime_redirected = value, "param updated");
        Ok(value)
    }

    #[cfg_attr(not(feature = "window"), allow(dead_code))]
    #[inline]
    pub fn telemetry_mut(&mut self) -> &mut SimulatedTelemetry { &mut self.telemetry }

    #[inline]
    pub const fn metrics(&self) -> &PanelMetrics { &self.metrics }

    #[cfg(test)]
    #[inline]
    pub const fn panel(&self) -> &Panel { &self.panel }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::tests::panel_assets;
    use embedded_graphics::prelude::Point;
    use embedded_graphics_simulator::SimulatorDisplay;
    use sidebar_common::{
        Severity,
        colors::{BACKGROUND, DANGER, WARNING},
        config::{PANEL_AREA, SETTINGS_BUTTON, accent_area, card_area},
        telemetry::{HardwareType, NetworkType},
        thresholds::NANOS_PER_SEC,
    };
    use std::sync::atomic::{AtomicU32, Ordering};

    const NOW: u64 = 1_000 * NANOS_PER_SEC;

    fn app(name: &str) -> App {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!("sidebar-app-params-{}-{name}-{n}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        App::new(panel_assets(name), Params::new(dir), PlatformCaps { shows_wifi_address: true })
    }

    fn display() -> SimulatorDisplay<Rgb888> { SimulatorDisplay::new(PANEL_AREA.size) }

    fn never_pinged() -> TelemetrySnapshot {
        TelemetrySnapshot {
            network_type: NetworkType::Wifi,
            network_strength: 2,
            hardware: HardwareType::Uno,
            gps_fix_ok: true,
            battery_percent: 40,
            ..TelemetrySnapshot::default()
        }
    }

    #[test]
    fn test_first_tick_paints() {
        let mut app = app("first");
        let mut d = display();
        assert!(app.tick(NOW, &mut d), "First tick must repaint");
        assert_eq!(d.get_pixel(Point::new(5, 5)), BACKGROUND);
        assert_eq!(app.metrics().repaints, 1);
    }

    #[test]
    fn test_identical_snapshots_draw_once() {
        let mut app = app("identical");
        let mut d = display();
        let snap = never_pinged();
        let draws = (0..4).filter(|_| app.apply_snapshot(&snap, NOW, &mut d)).count();
        assert_eq!(draws, 1);
        assert_eq!(app.metrics().suppressed, 3);
    }

    #[test]
    fn test_prime_redirect_flag_read_each_tick() {
        let mut app = app("prime");
        let mut d = display();
        let snap = never_pinged();
        let conn = accent_area(card_area(2)).center();

        app.apply_snapshot(&snap, NOW, &mut d);
        assert_eq!(d.get_pixel(conn), WARNING, "Never pinged without redirect is a warning");

        assert!(app.toggle_prime_redirected().unwrap(), "Flag starts unset and flips on");
        assert!(app.apply_snapshot(&snap, NOW, &mut d), "Flag change alone must repaint");
        assert_eq!(d.get_pixel(conn), DANGER);
        let state = app.panel().state().unwrap();
        assert_eq!(state.connectivity.severity(), Severity::Danger);
        assert!(state.connectivity.label_is(&["NO", "PRIME"]));
    }

    #[test]
    fn test_pointer_before_and_after_paint() {
        let mut app = app("pointer");
        let mut d = display();
        let tap = PointerEvent::Released(SETTINGS_BUTTON.center());
        assert_eq!(app.pointer(tap), None, "Nothing tappable before the first paint");

        app.tick(NOW, &mut d);
        assert_eq!(app.pointer(tap), Some(Action::OpenSettings));
        assert_eq!(app.pointer(PointerEvent::Pressed(SETTINGS_BUTTON.center())), None);
        assert_eq!(app.metrics().settings_opens, 1);
    }

    #[test]
    fn test_pointer_leaves_panel_state_alone() {
        let mut app = app("pointer-state");
        let mut d = display();
        app.tick(NOW, &mut d);
        let before = app.panel().state().cloned();
        app.pointer(PointerEvent::Released(SETTINGS_BUTTON.center()));
        assert_eq!(app.panel().state().cloned(), before);
    }
}
