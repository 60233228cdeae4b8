//! Tick and paint metrics.
//!
//! Counts telemetry ticks, repaints and suppressed repaints, settings opens,
//! and tracks paint timing. The app logs a summary every
//! [`METRICS_LOG_EVERY`](crate::config::METRICS_LOG_EVERY) ticks.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = PanelMetrics::new();
//!
//! // Each tick:
//! let paint_start = Instant::now();
//! // ... paint + draw ...
//! metrics.record_paint(paint_start.elapsed());
//! metrics.record_tick(repainted);
//! ```

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

/// Tick, repaint and paint-time statistics.
pub struct PanelMetrics {
    /// Telemetry ticks processed.
    pub ticks: u64,
    /// Ticks that produced a new state and a repaint.
    pub repaints: u64,
    /// Ticks whose state matched the previous one.
    pub suppressed: u64,
    /// Settings actions raised by pointer events.
    pub settings_opens: u32,

    /// Time taken by the last paint (scene build + draw).
    pub last_paint_us: u32,
    /// Slowest paint observed.
    pub paint_max_us: u32,
    /// Rolling average paint time (exponential moving average).
    paint_avg_us: f32,

    start_time: Instant,
}

impl PanelMetrics {
    /// Create new metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            ticks: 0,
            repaints: 0,
            suppressed: 0,
            settings_opens: 0,
            last_paint_us: 0,
            paint_max_us: 0,
            paint_avg_us: 0.0,
            start_time: Instant::now(),
        }
    }

    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f32 = 0.1;

    /// Count one tick and whether it repainted.
    pub const fn record_tick(&mut self, repainted: bool) {
        self.ticks += 1;
        if repainted {
            self.repaints += 1;
        } else {
            self.suppressed += 1;
        }
    }

    /// Record the duration of one paint.
    pub fn record_paint(&mut self, elapsed: Duration) {
        let us = elapsed.as_micros().min(u128::from(u32::MAX)) as u32;
        self.last_paint_us = us;
        self.paint_max_us = self.paint_max_us.max(us);

        if self.repaints == 0 {
            self.paint_avg_us = us as f32;
        } else {
            self.paint_avg_us = Self::EMA_ALPHA.mul_add(us as f32, (1.0 - Self::EMA_ALPHA) * self.paint_avg_us);
        }
    }

    #[inline]
    pub const fn inc_settings_opens(&mut self) { self.settings_opens += 1; }

    /// Average paint time in microseconds.
    #[inline]
    pub const fn paint_avg_us(&self) -> u32 { self.paint_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }

    /// Log a one-line summary.
    pub fn log_summary(&self) {
        tracing::info!(
            uptime = %self.uptime_string(),
            ticks = self.ticks,
            repaints = self.repaints,
            suppressed = self.suppressed,
            settings_opens = self.settings_opens,
            paint_last_us = self.last_paint_us,
            paint_avg_us = self.paint_avg_us(),
            paint_max_us = self.paint_max_us,
            "panel metrics"
        );
    }
}

impl Default for PanelMetrics {
    fn default() -> Self { Self::new() }
}

fn format_hms(secs: u64) -> String<12> {
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
    s
}
