//! Color constants for the sidebar panel.
//!
//! The panel is drawn in `Rgb888`. Desktop targets take it natively and the
//! palette matches the 8-bit values the dashboard art was designed with, so
//! there is no quantisation step between the design and the screen.
//!
//! # Translucency
//!
//! The panel background is a single opaque color, so anything drawn with
//! partial opacity (card borders, the dimmed settings icon) can be
//! pre-blended against [`BACKGROUND`] instead of needing an alpha channel in
//! the drawing backend. [`blend`] does that at runtime and [`blend_channel`]
//! at compile time.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::status::Severity;

// =============================================================================
// Panel Colors
// =============================================================================

/// Pure white. Used for text and lit signal-gauge segments.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Panel background fill (57, 57, 57).
pub const BACKGROUND: Rgb888 = Rgb888::new(BACKGROUND_RAW, BACKGROUND_RAW, BACKGROUND_RAW);

/// Unlit signal-gauge segment (84, 84, 84).
pub const GAUGE_OFF: Rgb888 = Rgb888::new(0x54, 0x54, 0x54);

/// Lit signal-gauge segment.
pub const GAUGE_ON: Rgb888 = WHITE;

/// Battery fill bar (#149948).
pub const BATTERY_FILL: Rgb888 = Rgb888::new(0x14, 0x99, 0x48);

/// Key color for icon transparency. Icon pixels of exactly this color are skipped.
pub const TRANSPARENT_KEY: Rgb888 = Rgb888::MAGENTA;

/// Status card border: white at alpha 0x55 over the background.
pub const CARD_BORDER: Rgb888 = Rgb888::new(
    blend_channel(0xff, BACKGROUND_RAW, CARD_BORDER_ALPHA),
    blend_channel(0xff, BACKGROUND_RAW, CARD_BORDER_ALPHA),
    blend_channel(0xff, BACKGROUND_RAW, CARD_BORDER_ALPHA),
);

const BACKGROUND_RAW: u8 = 57;
const CARD_BORDER_ALPHA: u8 = 0x55;

// =============================================================================
// Severity Accent Colors
// =============================================================================

/// Accent for [`Severity::Good`].
pub const GOOD: Rgb888 = Rgb888::new(23, 134, 68);

/// Accent for [`Severity::Warning`].
pub const WARNING: Rgb888 = Rgb888::new(218, 202, 37);

/// Accent for [`Severity::Danger`].
pub const DANGER: Rgb888 = Rgb888::new(201, 34, 49);

/// Accent bar color for a severity tier.
#[inline]
pub const fn severity_color(severity: Severity) -> Rgb888 {
    match severity {
        Severity::Good => GOOD,
        Severity::Warning => WARNING,
        Severity::Danger => DANGER,
    }
}

// =============================================================================
// Blending
// =============================================================================

/// Blend one 8-bit channel of `fg` over `bg` with `alpha` (0 = bg, 255 = fg).
#[inline]
pub const fn blend_channel(fg: u8, bg: u8, alpha: u8) -> u8 {
    let fg = fg as u32;
    let bg = bg as u32;
    let a = alpha as u32;
    ((fg * a + bg * (255 - a) + 127) / 255) as u8
}

/// Blend `fg` over `bg` with `alpha` (0 = bg, 255 = fg).
pub fn blend(fg: Rgb888, bg: Rgb888, alpha: u8) -> Rgb888 {
    Rgb888::new(
        blend_channel(fg.r(), bg.r(), alpha),
        blend_channel(fg.g(), bg.g(), alpha),
        blend_channel(fg.b(), bg.b(), alpha),
    )
}
