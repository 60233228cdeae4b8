//! Telemetry snapshot model.
//!
//! A [`TelemetrySnapshot`] is one reading of the device state handed to the
//! panel by the transport on every tick. The panel only reads it.
//!
//! # Unknown Values
//!
//! Every enum carries an explicit unknown member and defaults to it. Wire
//! ordinals or status strings outside the known set decode to that member, so
//! the classifier always sees a well-formed value and can route it to its
//! most conservative branch.

use heapless::{String, Vec};

use crate::status::truncated;

/// Maximum number of CPU temperature sensors carried in a snapshot.
pub const MAX_CPU_SENSORS: usize = 8;

/// Maximum number of GPU temperature sensors carried in a snapshot.
pub const MAX_GPU_SENSORS: usize = 4;

/// Capacity for address text (fits a full IPv6 literal).
pub const IP_TEXT_LEN: usize = 48;

/// Address text as carried in snapshots and panel state.
pub type IpText = String<IP_TEXT_LEN>;

// =============================================================================
// Network Type
// =============================================================================

/// Active network transport.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NetworkType {
    None,
    Wifi,
    Cell2G,
    Cell3G,
    Cell4G,
    Cell5G,
    Ethernet,
    #[default]
    Unknown,
}

impl NetworkType {
    /// Decode the wire ordinal (none, wifi, cell2G, cell3G, cell4G, cell5G, ethernet).
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::Wifi,
            2 => Self::Cell2G,
            3 => Self::Cell3G,
            4 => Self::Cell4G,
            5 => Self::Cell5G,
            6 => Self::Ethernet,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label shown under the signal gauge.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wifi => "WIFI",
            Self::Cell2G => "CELL2G",
            Self::Cell3G => "CELL3G",
            Self::Cell4G => "CELL4G",
            Self::Cell5G => "CELL5G",
            Self::Ethernet => "ETHERNET",
            Self::None | Self::Unknown => "OFFLINE",
        }
    }
}

// =============================================================================
// Thermal Status
// =============================================================================

/// Device thermal tier as reported by the thermal manager.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThermalStatus {
    Nominal,
    Elevated,
    Critical,
    #[default]
    Unknown,
}

impl ThermalStatus {
    /// Decode the wire ordinal (green, yellow, red, danger). Red and danger are both critical.
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::Nominal,
            1 => Self::Elevated,
            2 | 3 => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

// =============================================================================
// Hardware Type
// =============================================================================

/// Vehicle interface hardware detected on the bus. `Unknown` means absent.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HardwareType {
    #[default]
    Unknown,
    WhitePanda,
    GreyPanda,
    BlackPanda,
    Pedal,
    Uno,
    Dos,
}

impl HardwareType {
    /// Decode the wire ordinal. Anything unrecognized counts as absent.
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            1 => Self::WhitePanda,
            2 => Self::GreyPanda,
            3 => Self::BlackPanda,
            4 => Self::Pedal,
            5 => Self::Uno,
            6 => Self::Dos,
            _ => Self::Unknown,
        }
    }

    #[inline]
    pub const fn is_present(self) -> bool { !matches!(self, Self::Unknown) }
}

// =============================================================================
// Battery Status
// =============================================================================

/// Power-supply charge state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BatteryStatus {
    Charging,
    Discharging,
    Full,
    NotCharging,
    #[default]
    Unknown,
}

impl BatteryStatus {
    /// Parse the power-supply status text. Matching is exact, as the kernel reports it.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "Charging" => Self::Charging,
            "Discharging" => Self::Discharging,
            "Full" => Self::Full,
            "Not charging" => Self::NotCharging,
            _ => Self::Unknown,
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// One telemetry reading for a single tick.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TelemetrySnapshot {
    pub network_type: NetworkType,
    /// Signal strength ordinal (0 = unknown/none, higher = better).
    pub network_strength: i32,
    pub wifi_ip_address: IpText,
    /// Monotonic timestamp of the last connectivity ping in nanoseconds, 0 = never.
    pub last_connectivity_ping_ns: u64,
    pub thermal_status: ThermalStatus,
    pub ambient_temp_c: f32,
    pub cpu_temps_c: Vec<f32, MAX_CPU_SENSORS>,
    pub gpu_temps_c: Vec<f32, MAX_GPU_SENSORS>,
    pub hardware: HardwareType,
    pub gps_fix_ok: bool,
    /// Whether the assist session is active.
    pub started: bool,
    pub battery_status: BatteryStatus,
    pub battery_percent: i32,
}

impl TelemetrySnapshot {
    /// Set the Wi-Fi address, truncating to [`IP_TEXT_LEN`].
    pub fn set_wifi_ip_address(&mut self, addr: &str) { self.wifi_ip_address = truncated(addr); }

    /// Replace the CPU readings, keeping at most [`MAX_CPU_SENSORS`].
    pub fn set_cpu_temps(&mut self, temps: &[f32]) {
        self.cpu_temps_c.clear();
        for &t in temps.iter().take(MAX_CPU_SENSORS) {
            let _ = self.cpu_temps_c.push(t);
        }
    }

    /// Replace the GPU readings, keeping at most [`MAX_GPU_SENSORS`].
    pub fn set_gpu_temps(&mut self, temps: &[f32]) {
        self.gpu_temps_c.clear();
        for &t in temps.iter().take(MAX_GPU_SENSORS) {
            let _ = self.gpu_temps_c.push(t);
        }
    }
}

/// Per-tick inputs that do not come from the telemetry snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickContext {
    /// Current monotonic time in nanoseconds, same clock as the ping timestamp.
    pub now_ns: u64,
    /// Persisted "prime redirected" flag, read by the host from its config store.
    pub prime_redirected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unknown() {
        let snap = TelemetrySnapshot::default();
        assert_eq!(snap.network_type, NetworkType::Unknown);
        assert_eq!(snap.thermal_status, ThermalStatus::Unknown);
        assert_eq!(snap.hardware, HardwareType::Unknown);
        assert_eq!(snap.battery_status, BatteryStatus::Unknown);
        assert_eq!(snap.last_connectivity_ping_ns, 0);
    }

    #[test]
    fn test_network_from_raw() {
        assert_eq!(NetworkType::from_raw(0), NetworkType::None);
        assert_eq!(NetworkType::from_raw(1), NetworkType::Wifi);
        assert_eq!(NetworkType::from_raw(4), NetworkType::Cell4G);
        assert_eq!(NetworkType::from_raw(6), NetworkType::Ethernet);
        assert_eq!(NetworkType::from_raw(7), NetworkType::Unknown);
        assert_eq!(NetworkType::from_raw(u16::MAX), NetworkType::Unknown);
    }

    #[test]
    fn test_network_labels() {
        assert_eq!(NetworkType::Wifi.label(), "WIFI");
        assert_eq!(NetworkType::Cell4G.label(), "CELL4G");
        assert_eq!(NetworkType::None.label(), "OFFLINE");
        assert_eq!(NetworkType::Unknown.label(), "OFFLINE", "Unknown transport reads as offline");
    }

    #[test]
    fn test_thermal_from_raw() {
        assert_eq!(ThermalStatus::from_raw(0), ThermalStatus::Nominal);
        assert_eq!(ThermalStatus::from_raw(1), ThermalStatus::Elevated);
        assert_eq!(ThermalStatus::from_raw(2), ThermalStatus::Critical);
        assert_eq!(ThermalStatus::from_raw(3), ThermalStatus::Critical);
        assert_eq!(ThermalStatus::from_raw(9), ThermalStatus::Unknown);
    }

    #[test]
    fn test_hardware_presence() {
        assert!(!HardwareType::from_raw(0).is_present());
        assert!(!HardwareType::from_raw(42).is_present(), "Unrecognized hardware counts as absent");
        assert!(HardwareType::from_raw(5).is_present());
        assert_eq!(HardwareType::from_raw(6), HardwareType::Dos);
    }

    #[test]
    fn test_battery_status_parse() {
        assert_eq!(BatteryStatus::parse("Charging"), BatteryStatus::Charging);
        assert_eq!(BatteryStatus::parse("Charging\n"), BatteryStatus::Charging, "Trailing newline from sysfs");
        assert_eq!(BatteryStatus::parse("Discharging"), BatteryStatus::Discharging);
        assert_eq!(BatteryStatus::parse("Full"), BatteryStatus::Full);
        assert_eq!(BatteryStatus::parse("Not charging"), BatteryStatus::NotCharging);
        assert_eq!(BatteryStatus::parse("charging"), BatteryStatus::Unknown, "Matching is case-sensitive");
        assert_eq!(BatteryStatus::parse(""), BatteryStatus::Unknown);
    }

    #[test]
    fn test_sensor_setters_cap_length() {
        let mut snap = TelemetrySnapshot::default();
        snap.set_cpu_temps(&[1.0; 20]);
        snap.set_gpu_temps(&[2.0; 20]);
        assert_eq!(snap.cpu_temps_c.len(), MAX_CPU_SENSORS);
        assert_eq!(snap.gpu_temps_c.len(), MAX_GPU_SENSORS);

        snap.set_cpu_temps(&[3.0]);
        assert_eq!(snap.cpu_temps_c.as_slice(), &[3.0]);
    }

    #[test]
    fn test_set_wifi_ip_address() {
        let mut snap = TelemetrySnapshot::default();
        snap.set_wifi_ip_address("192.168.1.5");
        assert_eq!(snap.wifi_ip_address.as_str(), "192.168.1.5");
    }
}
