//! Panel state and repaint tracking.
//!
//! [`Panel`] owns the current [`PanelState`]. Each telemetry tick it
//! classifies the new snapshot into a complete state, compares it by value
//! with the installed one and swaps it in. Only a differing state asks the
//! host for a repaint.
//!
//! | Tick | Repaint |
//! |------|---------|
//! | First | Always |
//! | Same state as previous | Suppressed |
//! | Any field differs | Requested |
//!
//! The state is never edited in place, so a paint always sees one tick's
//! state in full.

use crate::{
    classify::classify_panel,
    status::StatusItem,
    telemetry::{IpText, NetworkType, TelemetrySnapshot, TickContext},
};

/// Everything the renderer needs for one tick.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PanelState {
    pub network_type: NetworkType,
    pub network_label: &'static str,
    /// Lit signal gauge segments, 0..=5.
    pub strength_bars: u8,
    pub ip_address: IpText,
    /// Battery charge, 0..=100.
    pub battery_percent: u8,
    pub is_charging: bool,
    pub thermal: StatusItem,
    pub hardware: StatusItem,
    pub connectivity: StatusItem,
}

impl PanelState {
    /// Status cards in draw order: thermal, hardware, connectivity.
    #[inline]
    pub const fn cards(&self) -> [&StatusItem; 3] { [&self.thermal, &self.hardware, &self.connectivity] }
}

/// Owner of the current panel state.
pub struct Panel {
    state: Option<PanelState>,
}

impl Panel {
    /// Create a panel with no state. The first update always requests a repaint.
    pub const fn new() -> Self { Self { state: None } }

    /// Classify one tick and install the result.
    ///
    /// Returns `true` when the state changed and the panel needs repainting.
    pub fn update(&mut self, snapshot: &TelemetrySnapshot, ctx: &TickContext) -> bool {
        self.install(classify_panel(snapshot, ctx))
    }

    /// Install a fully built state. Returns `true` if it differs from the current one.
    pub fn install(&mut self, next: PanelState) -> bool {
        if self.state.as_ref() == Some(&next) {
            return false;
        }
        self.state = Some(next);
        true
    }

    /// Current state, `None` until the first tick.
    #[inline]
    pub const fn state(&self) -> Option<&PanelState> { self.state.as_ref() }
}

impl Default for Panel {
    fn default() -> Self { Self::new() }
}
