//! Telemetry classification.
//!
//! Pure functions that reduce a [`TelemetrySnapshot`] to the values the panel
//! shows. Nothing here reads a clock or a config store: the current time and
//! the persisted prime-redirect flag arrive through [`TickContext`].
//!
//! # Rules
//!
//! | Dimension | Good | Warning | Danger |
//! |-----------|------|---------|--------|
//! | Connectivity | ping < 80 s old | never pinged | never pinged + prime redirect, stale ping |
//! | Thermal | nominal | elevated | critical or unknown |
//! | Hardware | present, GPS ok or session idle | session started without GPS fix | hardware absent |
//!
//! Anything outside the known value set lands in the Warning/Danger column,
//! never in Good.

use core::fmt::Write;

use crate::{
    panel::PanelState,
    status::{LabelLine, Severity, StatusItem},
    telemetry::{BatteryStatus, IpText, NetworkType, TelemetrySnapshot, ThermalStatus, TickContext},
    thresholds::{
        BATTERY_PERCENT_MAX, CONNECT_TIMEOUT_NS, MAX_STRENGTH_BARS, PING_NEVER, STRENGTH_BAR_OFFSET, TEMP_DISPLAY_MAX_C,
        TEMP_DISPLAY_MIN_C,
    },
};

/// Network part of the panel: label, gauge level and address.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NetworkStatus {
    pub label: &'static str,
    pub strength_bars: u8,
    /// Wi-Fi address, empty unless the network type is Wi-Fi.
    pub ip: IpText,
}

/// Map the raw strength ordinal to lit gauge segments.
///
/// Zero or negative means no signal. Otherwise the value is shifted up by
/// one and clamped to the gauge size, so raw 3 lights 4 segments.
pub fn strength_bars(raw: i32) -> u8 {
    if raw <= 0 {
        return 0;
    }
    raw.saturating_add(STRENGTH_BAR_OFFSET).clamp(0, i32::from(MAX_STRENGTH_BARS)) as u8
}

pub fn classify_network(snapshot: &TelemetrySnapshot) -> NetworkStatus {
    let ip = if snapshot.network_type == NetworkType::Wifi {
        snapshot.wifi_ip_address.clone()
    } else {
        IpText::new()
    };
    NetworkStatus {
        label: snapshot.network_type.label(),
        strength_bars: strength_bars(snapshot.network_strength),
        ip,
    }
}

/// Classify the cloud connection from the last ping time.
///
/// A ping timestamp later than `now_ns` cannot come from a healthy clock and
/// is reported as an error.
pub fn classify_connectivity(snapshot: &TelemetrySnapshot, prime_redirected: bool, now_ns: u64) -> StatusItem {
    let last_ping = snapshot.last_connectivity_ping_ns;
    if last_ping == PING_NEVER {
        return if prime_redirected {
            StatusItem::new(Severity::Danger, &["NO", "PRIME"])
        } else {
            StatusItem::new(Severity::Warning, &["CONNECT", "OFFLINE"])
        };
    }

    match now_ns.checked_sub(last_ping) {
        Some(age) if age < CONNECT_TIMEOUT_NS => StatusItem::new(Severity::Good, &["CONNECT", "ONLINE"]),
        _ => StatusItem::new(Severity::Danger, &["CONNECT", "ERROR"]),
    }
}

/// Hottest reading on the device: ambient raised to every CPU and GPU sensor.
///
/// `f32::max` ignores NaN, so a dead sensor never masks a live one.
pub fn hottest_temp(snapshot: &TelemetrySnapshot) -> f32 {
    snapshot
        .cpu_temps_c
        .iter()
        .chain(snapshot.gpu_temps_c.iter())
        .fold(snapshot.ambient_temp_c, |hottest, &t| hottest.max(t))
}

/// Format a temperature as shown on the thermal card, e.g. `"47.3°C"`.
///
/// Out-of-range readings are pinned to the display range. NaN stays `NaN°C`.
pub fn format_temp(temp_c: f32) -> LabelLine {
    let shown = temp_c.clamp(TEMP_DISPLAY_MIN_C, TEMP_DISPLAY_MAX_C);
    let mut line = LabelLine::new();
    if write!(line, "{shown:.1}°C").is_err() {
        line.clear();
        let _ = line.push_str("--°C");
    }
    line
}

/// Classify the thermal card. Returns the item and the temperature it shows.
///
/// Unknown thermal status shares the critical label rather than getting a
/// tier of its own.
pub fn classify_thermal(snapshot: &TelemetrySnapshot) -> (StatusItem, f32) {
    let temp = hottest_temp(snapshot);
    let temp_line = format_temp(temp);
    let item = match snapshot.thermal_status {
        ThermalStatus::Nominal => StatusItem::new(Severity::Good, &[temp_line.as_str(), "GOOD", "CPU"]),
        ThermalStatus::Elevated => StatusItem::new(Severity::Warning, &[temp_line.as_str(), "OK", "CPU"]),
        ThermalStatus::Critical | ThermalStatus::Unknown => StatusItem::new(Severity::Danger, &[temp_line.as_str(), "HIGH_TEMP"]),
    };
    (item, temp)
}

/// Classify the vehicle-hardware card. Absent hardware outranks GPS state.
pub fn classify_hardware(snapshot: &TelemetrySnapshot) -> StatusItem {
    if !snapshot.hardware.is_present() {
        StatusItem::new(Severity::Danger, &["NO", "HARDWARE"])
    } else if snapshot.started && !snapshot.gps_fix_ok {
        StatusItem::new(Severity::Warning, &["GPS", "SEARCHING"])
    } else {
        StatusItem::new(Severity::Good, &["VEHICLE", "ONLINE"])
    }
}

/// Battery percent (clamped to 0..=100) and charging flag.
pub fn classify_battery(snapshot: &TelemetrySnapshot) -> (u8, bool) {
    let percent = snapshot.battery_percent.clamp(0, i32::from(BATTERY_PERCENT_MAX)) as u8;
    (percent, snapshot.battery_status == BatteryStatus::Charging)
}

/// Classify every dimension of one snapshot into a complete panel state.
pub fn classify_panel(snapshot: &TelemetrySnapshot, ctx: &TickContext) -> PanelState {
    let network = classify_network(snapshot);
    let (thermal, _) = classify_thermal(snapshot);
    let (battery_percent, is_charging) = classify_battery(snapshot);

    PanelState {
        network_type: snapshot.network_type,
        network_label: network.label,
        strength_bars: network.strength_bars,
        ip_address: network.ip,
        battery_percent,
        is_charging,
        thermal,
        hardware: classify_hardware(snapshot),
        connectivity: classify_connectivity(snapshot, ctx.prime_redirected, ctx.now_ns),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
