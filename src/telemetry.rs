//! Simulated telemetry source.
//!
//! Produces one [`TelemetrySnapshot`] per tick from slow sine generators so the
//! panel has something moving to show without a device attached. Discrete
//! fields (GPS, hardware, charging, network type, session, ping freshness)
//! hold steady values that the window-mode keyboard flips through
//! [`SimCommand`].
//!
//! | Field | Generator |
//! |-------|-----------|
//! | Ambient temp | 30–55 °C |
//! | CPU temps (4) | 40–88 °C, staggered frequencies |
//! | GPU temp | 35–78 °C |
//! | Battery percent | 5–100 % |
//! | Signal strength | 0–4 sweep |
//! | Thermal status | derived from the hottest sensor |

use sidebar_common::{
    BatteryStatus,
    HardwareType,
    NetworkType,
    TelemetrySnapshot,
    ThermalStatus,
    thresholds::{CONNECT_TIMEOUT_NS, NANOS_PER_SEC, PING_NEVER},
};

/// Signal time advanced per tick.
const T_STEP: f32 = 0.05;

/// Address reported while on Wi-Fi.
pub const SIM_WIFI_ADDRESS: &str = "192.168.1.5";

/// Hottest sensor at or above this reads as elevated.
const ELEVATED_AT_C: f32 = 70.0;

/// Hottest sensor at or above this reads as critical.
const CRITICAL_AT_C: f32 = 82.0;

const _: () = assert!(ELEVATED_AT_C < CRITICAL_AT_C);

/// Network types the `N` key cycles through, in order.
const NETWORK_CYCLE: [NetworkType; 7] = [
    NetworkType::Wifi,
    NetworkType::Cell4G,
    NetworkType::Cell5G,
    NetworkType::Cell3G,
    NetworkType::Cell2G,
    NetworkType::Ethernet,
    NetworkType::None,
];

/// Connectivity ping freshness the simulator reports. Only the window
/// controls cycle away from `Fresh`.
#[cfg_attr(not(feature = "window"), allow(dead_code))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PingState {
    /// Last ping one second ago.
    Fresh,
    /// Last ping twice the timeout ago.
    Stale,
    /// No ping ever received.
    Never,
}

impl PingState {
    #[cfg_attr(not(feature = "window"), allow(dead_code))]
    const fn next(self) -> Self {
        match self {
            Self::Fresh => Self::Stale,
            Self::Stale => Self::Never,
            Self::Never => Self::Fresh,
        }
    }

    /// Ping timestamp to report at `now_ns`.
    fn timestamp(self, now_ns: u64) -> u64 {
        match self {
            // Clamped to 1 so an early clock never reads as "never pinged"
            Self::Fresh => now_ns.saturating_sub(NANOS_PER_SEC).max(1),
            Self::Stale => now_ns.saturating_sub(2 * CONNECT_TIMEOUT_NS).max(1),
            Self::Never => PING_NEVER,
        }
    }
}

/// Keyboard-driven changes to the simulated device.
#[cfg_attr(not(feature = "window"), allow(dead_code))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SimCommand {
    ToggleGps,
    ToggleHardware,
    ToggleCharging,
    CycleNetwork,
    ToggleStarted,
    CyclePing,
}

/// Deterministic telemetry generator.
pub struct SimulatedTelemetry {
    t: f32,
    gps_fix_ok: bool,
    hardware_present: bool,
    charging: bool,
    network: usize,
    started: bool,
    ping: PingState,
}

impl SimulatedTelemetry {
    pub const fn new() -> Self {
        Self {
            t: 0.0,
            gps_fix_ok: true,
            hardware_present: true,
            charging: false,
            network: 0,
            started: true,
            ping: PingState::Fresh,
        }
    }

    #[cfg(test)]
    #[inline]
    pub const fn ping(&self) -> PingState { self.ping }

    #[inline]
    pub const fn network(&self) -> NetworkType { NETWORK_CYCLE[self.network] }

    /// Apply a keyboard command.
    #[cfg_attr(not(feature = "window"), allow(dead_code))]
    pub fn apply(&mut self, cmd: SimCommand) {
        match cmd {
            SimCommand::ToggleGps => self.gps_fix_ok = !self.gps_fix_ok,
            SimCommand::ToggleHardware => self.hardware_present = !self.hardware_present,
            SimCommand::ToggleCharging => self.charging = !self.charging,
            SimCommand::CycleNetwork => self.network = (self.network + 1) % NETWORK_CYCLE.len(),
            SimCommand::ToggleStarted => self.started = !self.started,
            SimCommand::CyclePing => self.ping = self.ping.next(),
        }
        tracing::info!(?cmd, network = ?self.network(), ping = ?self.ping, "simulated device changed");
    }

    /// Produce the snapshot for a tick at `now_ns` and advance the generators.
    pub fn next_snapshot(&mut self, now_ns: u64) -> TelemetrySnapshot {
        let t = self.t;
        self.t += T_STEP;

        let network_type = self.network();
        let ambient = fake_signal(t, 30.0, 55.0, 0.05);
        let cpu = [
            fake_signal(t, 40.0, 88.0, 0.11),
            fake_signal(t + 1.3, 40.0, 85.0, 0.09),
            fake_signal(t + 2.1, 40.0, 80.0, 0.13),
            fake_signal(t + 0.7, 40.0, 84.0, 0.07),
        ];
        let gpu = [fake_signal(t, 35.0, 78.0, 0.06)];
        let hottest = cpu.iter().chain(&gpu).fold(ambient, |a, &b| a.max(b));

        let mut snapshot = TelemetrySnapshot {
            network_type,
            network_strength: strength_sweep(t),
            last_connectivity_ping_ns: self.ping.timestamp(now_ns),
            thermal_status: thermal_status(hottest),
            ambient_temp_c: ambient,
            hardware: if self.hardware_present { HardwareType::Dos } else { HardwareType::Unknown },
            gps_fix_ok: self.gps_fix_ok,
            started: self.started,
            battery_status: if self.charging { BatteryStatus::Charging } else { BatteryStatus::Discharging },
            battery_percent: fake_signal(t, 5.0, 100.0, 0.03) as i32,
            ..TelemetrySnapshot::default()
        };
        if network_type == NetworkType::Wifi {
            snapshot.set_wifi_ip_address(SIM_WIFI_ADDRESS);
        }
        snapshot.set_cpu_temps(&cpu);
        snapshot.set_gpu_temps(&gpu);
        snapshot
    }
}

impl Default for SimulatedTelemetry {
    fn default() -> Self { Self::new() }
}

/// Thermal tier the device's thermal manager would report for `hottest_c`.
fn thermal_status(hottest_c: f32) -> ThermalStatus {
    if hottest_c >= CRITICAL_AT_C {
        ThermalStatus::Critical
    } else if hottest_c >= ELEVATED_AT_C {
        ThermalStatus::Elevated
    } else {
        ThermalStatus::Nominal
    }
}

/// Raw strength ordinal 0..=4, sweeping slowly.
fn strength_sweep(t: f32) -> i32 { fake_signal(t, 0.0, 4.0, 0.2).round() as i32 }

/// Generate a sinusoidal signal oscillating between min and max values.
///
/// # Parameters
/// - `t`: Time parameter (advances each tick)
/// - `min`: Minimum output value
/// - `max`: Maximum output value
/// - `freq`: Oscillation frequency (higher = faster cycles)
fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
