//! Centralized classification thresholds.
//!
//! All thresholds are compile-time constants. Where two constants must keep an
//! ordering, a `const` assertion makes a bad edit fail to compile.

// =============================================================================
// Connectivity
// =============================================================================

/// Nanoseconds per second, for monotonic-clock arithmetic.
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// A connectivity ping younger than this counts as online (80 seconds).
/// At or beyond it the connection is reported as an error.
pub const CONNECT_TIMEOUT_NS: u64 = 80 * NANOS_PER_SEC;

/// Ping timestamp meaning "no ping ever received".
pub const PING_NEVER: u64 = 0;

const _: () = assert!(CONNECT_TIMEOUT_NS > 0);

// =============================================================================
// Network Strength
// =============================================================================

/// Number of segments in the signal-strength gauge.
pub const MAX_STRENGTH_BARS: u8 = 5;

/// Raw strength values are shifted up by one before clamping, so the weakest
/// reported signal still lights a segment.
pub const STRENGTH_BAR_OFFSET: i32 = 1;

// =============================================================================
// Temperature
// =============================================================================

/// Readings are clamped to this range before formatting so the thermal line
/// always fits a label line.
pub const TEMP_DISPLAY_MIN_C: f32 = -99.9;
pub const TEMP_DISPLAY_MAX_C: f32 = 999.9;

const _: () = assert!(TEMP_DISPLAY_MIN_C < TEMP_DISPLAY_MAX_C);

// =============================================================================
// Battery
// =============================================================================

/// Upper bound of the displayed battery percentage.
pub const BATTERY_PERCENT_MAX: u8 = 100;
