//! Panel layout constants.
//!
//! The sidebar has a fixed geometry: every region is a compile-time
//! `Point`/`Size`/`Rectangle`, so the renderer does no layout arithmetic
//! beyond per-line text placement and the battery fill width.
//!
//! ```text
//!  0 ┌──────────────────────────┐
//!    │          [ settings ]    │  35..152
//!    │  ● ● ● ● ●               │  196 (signal gauge)
//!    │      WIFI / address      │  230..280
//!    │  [batt]     62%          │  293..329
//!    │ ┌──────────────────────┐ │
//!    │ ▌ thermal card         │ │  345..485
//!    │ └──────────────────────┘ │
//!    │ ┌──────────────────────┐ │
//!    │ ▌ hardware card        │ │  505..645
//!    │ └──────────────────────┘ │
//!    │ ┌──────────────────────┐ │
//!    │ ▌ connectivity card    │ │  665..805
//!    │ └──────────────────────┘ │
//!    │    [ home ]              │  860..1040
//! 1080└──────────────────────────┘
//!              300
//! ```

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

// =============================================================================
// Panel
// =============================================================================

/// Panel width in logical pixels.
pub const PANEL_WIDTH: u32 = 300;

/// Panel height in logical pixels.
pub const PANEL_HEIGHT: u32 = 1080;

/// Full panel area.
pub const PANEL_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(PANEL_WIDTH, PANEL_HEIGHT));

// =============================================================================
// Buttons
// =============================================================================

/// Settings button size.
pub const SETTINGS_SIZE: Size = Size::new(200, 117);

/// Gap between the settings button and the panel's right edge.
pub const SETTINGS_RIGHT_MARGIN: u32 = 20;

/// Settings button area, anchored top-right. Also the tap target.
pub const SETTINGS_BUTTON: Rectangle = Rectangle::new(
    Point::new((PANEL_WIDTH - SETTINGS_RIGHT_MARGIN - SETTINGS_SIZE.width) as i32, 35),
    SETTINGS_SIZE,
);

/// Settings icon opacity (0.65).
pub const SETTINGS_OPACITY: u8 = 166;

/// Home button size.
pub const HOME_SIZE: Size = Size::new(180, 180);

/// Home button area, anchored 40px above the bottom edge.
pub const HOME_BUTTON: Rectangle = Rectangle::new(
    Point::new(60, (PANEL_HEIGHT - HOME_SIZE.height - 40) as i32),
    HOME_SIZE,
);

const _: () = assert!(SETTINGS_SIZE.width + SETTINGS_RIGHT_MARGIN <= PANEL_WIDTH);

// =============================================================================
// Signal Gauge
// =============================================================================

/// X of the first gauge circle's bounding box.
pub const SIGNAL_X: i32 = 58;

/// Y of every gauge circle's bounding box.
pub const SIGNAL_Y: i32 = 196;

/// Gauge circle diameter.
pub const SIGNAL_DIAMETER: u32 = 27;

/// Horizontal distance between consecutive circles.
pub const SIGNAL_STEP: i32 = 37;

/// Network label / address text box, below the gauge.
pub const NETWORK_TEXT: Rectangle = Rectangle::new(Point::new(20, 230), Size::new(250, 50));

// =============================================================================
// Battery Gauge
// =============================================================================

/// Battery icon area.
pub const BATTERY_ICON: Rectangle = Rectangle::new(Point::new(45, 293), Size::new(96, 36));

/// Top-left corner of the battery fill bar (inside the icon outline).
pub const BATTERY_FILL_ORIGIN: Point = Point::new(50, 298);

/// Fill bar width at 100%.
pub const BATTERY_FILL_MAX_WIDTH: u32 = 76;

/// Fill bar height.
pub const BATTERY_FILL_HEIGHT: u32 = 25;

/// Percentage text box, left-aligned to the right of the icon.
pub const BATTERY_TEXT: Rectangle = Rectangle::new(Point::new(170, 288), Size::new(PANEL_WIDTH - 170, 50));

// =============================================================================
// Status Cards
// =============================================================================

/// Left edge of every status card.
pub const CARD_X: i32 = 30;

/// Card size.
pub const CARD_SIZE: Size = Size::new(240, 140);

/// Top edges of the thermal, hardware and connectivity cards, in draw order.
pub const CARD_Y: [i32; 3] = [345, 505, 665];

/// Card outline corner radius.
pub const CARD_RADIUS: u32 = 20;

/// Card outline stroke width.
pub const CARD_BORDER_WIDTH: u32 = 2;

/// Accent bar inset from the card's top-left corner.
pub const ACCENT_INSET: u32 = 6;

/// Accent bar width.
pub const ACCENT_WIDTH: u32 = 18;

/// Accent bar corner radius (left corners only).
pub const ACCENT_RADIUS: u32 = 10;

/// Label box starts this far right of the card's left edge.
pub const CARD_LABEL_INSET_LEFT: u32 = 35;

/// Label box is this much narrower than the card.
pub const CARD_LABEL_SHRINK: u32 = 50;

const _: () = assert!(CARD_Y[0] + (CARD_SIZE.height as i32) < CARD_Y[1]);
const _: () = assert!(CARD_Y[1] + (CARD_SIZE.height as i32) < CARD_Y[2]);
const _: () = assert!(CARD_Y[2] + (CARD_SIZE.height as i32) < HOME_BUTTON.top_left.y);

/// Outline of the card at index `i` (0 = thermal, 1 = hardware, 2 = connectivity).
#[inline]
pub const fn card_area(i: usize) -> Rectangle { Rectangle::new(Point::new(CARD_X, CARD_Y[i]), CARD_SIZE) }

/// Accent bar area of a card.
#[inline]
pub const fn accent_area(card: Rectangle) -> Rectangle {
    Rectangle::new(
        Point::new(card.top_left.x + ACCENT_INSET as i32, card.top_left.y + ACCENT_INSET as i32),
        Size::new(ACCENT_WIDTH, card.size.height - 2 * ACCENT_INSET),
    )
}

/// Label text box of a card.
#[inline]
pub const fn card_label_area(card: Rectangle) -> Rectangle {
    Rectangle::new(
        Point::new(card.top_left.x + CARD_LABEL_INSET_LEFT as i32, card.top_left.y),
        Size::new(card.size.width - CARD_LABEL_SHRINK, card.size.height),
    )
}
