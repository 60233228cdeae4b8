//! Scene rendering: [`PanelState`] in, draw list out.
//!
//! The renderer never touches a display. [`Renderer::paint`] turns a state
//! into a [`Scene`], an ordered list of [`DrawCmd`]s with every position
//! already resolved, and a platform backend executes the list. Later commands
//! paint over earlier ones.
//!
//! # Draw Order
//!
//! | # | Element | Commands |
//! |---|---------|----------|
//! | 1 | Background | 1 fill |
//! | 2 | Settings / home icons | 2 icons |
//! | 3 | Signal gauge | 5 circles |
//! | 4 | Network text | 1 text |
//! | 5 | Battery | fill bar, icon, percentage |
//! | 6 | Status cards | per card: accent bar, outline, 1–3 text lines |
//!
//! A full scene is at most 27 commands; [`SCENE_CAPACITY`] leaves headroom.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::{Point, Size},
    primitives::{CornerRadii, CornerRadiiBuilder, Rectangle},
    text::Alignment,
};
use heapless::{String, Vec};

use crate::{
    colors::{BACKGROUND, BATTERY_FILL, CARD_BORDER, GAUGE_OFF, GAUGE_ON, WHITE, severity_color},
    config::{
        ACCENT_RADIUS,
        BATTERY_FILL_HEIGHT,
        BATTERY_FILL_MAX_WIDTH,
        BATTERY_FILL_ORIGIN,
        BATTERY_ICON,
        BATTERY_TEXT,
        CARD_BORDER_WIDTH,
        CARD_RADIUS,
        HOME_BUTTON,
        NETWORK_TEXT,
        PANEL_AREA,
        SETTINGS_BUTTON,
        SETTINGS_OPACITY,
        SIGNAL_DIAMETER,
        SIGNAL_STEP,
        SIGNAL_X,
        SIGNAL_Y,
        accent_area,
        card_area,
        card_label_area,
    },
    panel::PanelState,
    status::StatusItem,
    styles::Font,
    telemetry::NetworkType,
    thresholds::{BATTERY_PERCENT_MAX, MAX_STRENGTH_BARS},
};

/// Maximum number of commands in one scene.
pub const SCENE_CAPACITY: usize = 32;

/// Capacity of a text command's string.
pub const TEXT_LEN: usize = 48;

/// Text carried by a scene command.
pub type SceneText = String<TEXT_LEN>;

/// Icons the backend knows how to draw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconId {
    Settings,
    Home,
    Battery,
    BatteryCharging,
}

/// One drawing operation with resolved geometry.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCmd {
    /// Solid rectangle.
    Fill { area: Rectangle, color: Rgb888 },
    /// Filled circle inside a `diameter`-sized box at `top_left`.
    Circle { top_left: Point, diameter: u32, color: Rgb888 },
    /// Rounded rectangle, filled and/or outlined (outline stroked inside `area`).
    RoundedBox {
        area: Rectangle,
        corners: CornerRadii,
        fill: Option<Rgb888>,
        stroke: Option<Rgb888>,
        stroke_width: u32,
    },
    /// Icon scaled to `area`, blended over the background at `opacity` (255 = opaque).
    Icon { icon: IconId, area: Rectangle, opacity: u8 },
    /// One line of text. `position.y` is the vertical center of the line.
    Text {
        text: SceneText,
        position: Point,
        font: Font,
        alignment: Alignment,
        color: Rgb888,
    },
}

/// Ordered draw list for one repaint.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Scene {
    cmds: Vec<DrawCmd, SCENE_CAPACITY>,
}

impl Scene {
    pub const fn new() -> Self { Self { cmds: Vec::new() } }

    /// Append a command. A full scene drops it; the panel layout stays below capacity.
    fn push(&mut self, cmd: DrawCmd) {
        let _ = self.cmds.push(cmd);
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCmd] { &self.cmds }

    #[inline]
    pub fn len(&self) -> usize { self.cmds.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.cmds.is_empty() }
}

/// What the host platform can show.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PlatformCaps {
    /// Whether the Wi-Fi address replaces the network label while on Wi-Fi.
    pub shows_wifi_address: bool,
}

// =============================================================================
// Layout Helpers
// =============================================================================

/// Text shown under the signal gauge.
pub fn network_text<'a>(state: &'a PanelState, caps: PlatformCaps) -> &'a str {
    if caps.shows_wifi_address && state.network_type == NetworkType::Wifi {
        &state.ip_address
    } else {
        state.network_label
    }
}

/// Battery fill bar width for a percentage, truncated to whole pixels.
#[inline]
pub fn battery_fill_width(percent: u8) -> u32 {
    BATTERY_FILL_MAX_WIDTH * u32::from(percent.min(BATTERY_PERCENT_MAX)) / u32::from(BATTERY_PERCENT_MAX)
}

/// Battery percentage label, e.g. `"62%"`.
pub fn battery_text(percent: u8) -> SceneText {
    let mut text = SceneText::new();
    let _ = write!(text, "{percent}%");
    text
}

/// Top-left corner of gauge circle `i`.
#[inline]
pub const fn signal_circle_origin(i: u8) -> Point { Point::new(SIGNAL_X + SIGNAL_STEP * i as i32, SIGNAL_Y) }

/// Vertical centers for `count` lines stacked and centered in `area`.
///
/// Rounds the same way as [`Rectangle::center`], so a single line lands
/// exactly on the area center. Yields nothing for `count == 0`.
pub fn line_centers(area: Rectangle, count: usize, font: Font) -> impl Iterator<Item = i32> {
    let line_h = font.line_height() as i32;
    let top = area.center().y - (line_h * count as i32 - 1) / 2;
    (0..count).map(move |i| top + line_h * i as i32 + (line_h - 1) / 2)
}

fn accent_corners() -> CornerRadii {
    let r = Size::new(ACCENT_RADIUS, ACCENT_RADIUS);
    CornerRadiiBuilder::new().top_left(r).bottom_left(r).build()
}

// =============================================================================
// Renderer
// =============================================================================

/// Produces scenes and remembers the tap target it last painted.
pub struct Renderer {
    caps: PlatformCaps,
    settings_button: Option<Rectangle>,
}

impl Renderer {
    pub const fn new(caps: PlatformCaps) -> Self { Self { caps, settings_button: None } }

    #[inline]
    pub const fn caps(&self) -> PlatformCaps { self.caps }

    /// Settings icon area from the last paint, `None` before the first one.
    #[inline]
    pub const fn settings_button(&self) -> Option<Rectangle> { self.settings_button }

    /// Build the full scene for `state`.
    pub fn paint(&mut self, state: &PanelState) -> Scene {
        let mut scene = Scene::new();

        scene.push(DrawCmd::Fill { area: PANEL_AREA, color: BACKGROUND });

        scene.push(DrawCmd::Icon { icon: IconId::Settings, area: SETTINGS_BUTTON, opacity: SETTINGS_OPACITY });
        scene.push(DrawCmd::Icon { icon: IconId::Home, area: HOME_BUTTON, opacity: u8::MAX });
        self.settings_button = Some(SETTINGS_BUTTON);

        self.paint_network(&mut scene, state);
        Self::paint_battery(&mut scene, state);

        for (i, item) in state.cards().into_iter().enumerate() {
            Self::paint_card(&mut scene, card_area(i), item);
        }

        scene
    }

    fn paint_network(&self, scene: &mut Scene, state: &PanelState) {
        for i in 0..MAX_STRENGTH_BARS {
            let color = if i < state.strength_bars { GAUGE_ON } else { GAUGE_OFF };
            scene.push(DrawCmd::Circle { top_left: signal_circle_origin(i), diameter: SIGNAL_DIAMETER, color });
        }

        scene.push(DrawCmd::Text {
            text: crate::status::truncated(network_text(state, self.caps)),
            position: NETWORK_TEXT.center(),
            font: Font::Label,
            alignment: Alignment::Center,
            color: WHITE,
        });
    }

    fn paint_battery(scene: &mut Scene, state: &PanelState) {
        // Fill goes first so the icon outline sits on top of it
        let width = battery_fill_width(state.battery_percent);
        if width > 0 {
            scene.push(DrawCmd::Fill {
                area: Rectangle::new(BATTERY_FILL_ORIGIN, Size::new(width, BATTERY_FILL_HEIGHT)),
                color: BATTERY_FILL,
            });
        }

        let icon = if state.is_charging { IconId::BatteryCharging } else { IconId::Battery };
        scene.push(DrawCmd::Icon { icon, area: BATTERY_ICON, opacity: u8::MAX });

        scene.push(DrawCmd::Text {
            text: battery_text(state.battery_percent),
            position: Point::new(BATTERY_TEXT.top_left.x, BATTERY_TEXT.center().y),
            font: Font::Small,
            alignment: Alignment::Left,
            color: WHITE,
        });
    }

    fn paint_card(scene: &mut Scene, card: Rectangle, item: &StatusItem) {
        scene.push(DrawCmd::RoundedBox {
            area: accent_area(card),
            corners: accent_corners(),
            fill: Some(severity_color(item.severity())),
            stroke: None,
            stroke_width: 0,
        });

        scene.push(DrawCmd::RoundedBox {
            area: card,
            corners: CornerRadii::new(Size::new(CARD_RADIUS, CARD_RADIUS)),
            fill: None,
            stroke: Some(CARD_BORDER),
            stroke_width: CARD_BORDER_WIDTH,
        });

        let label_area = card_label_area(card);
        let center_x = label_area.center().x;
        for (line, y) in item.lines().iter().zip(line_centers(label_area, item.lines().len(), Font::Label)) {
            scene.push(DrawCmd::Text {
                text: crate::status::truncated(line),
                position: Point::new(center_x, y),
                font: Font::Label,
                alignment: Alignment::Center,
                color: WHITE,
            });
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_panel;
    use crate::colors::{DANGER, GOOD, WARNING};
    use crate::config::CARD_Y;
    use crate::telemetry::{BatteryStatus, HardwareType, TelemetrySnapshot, ThermalStatus, TickContext};
    use crate::thresholds::NANOS_PER_SEC;

    const NOW: u64 = 100 * NANOS_PER_SEC;

    fn state() -> PanelState {
        let mut snap = TelemetrySnapshot {
            network_type: NetworkType::Wifi,
            network_strength: 3,
            last_connectivity_ping_ns: NOW - NANOS_PER_SEC,
            thermal_status: ThermalStatus::Elevated,
            ambient_temp_c: 52.0,
            hardware: HardwareType::Uno,
            gps_fix_ok: false,
            started: true,
            battery_status: BatteryStatus::Discharging,
            battery_percent: 62,
            ..TelemetrySnapshot::default()
        };
        snap.set_wifi_ip_address("192.168.1.5");
        classify_panel(&snap, &TickContext { now_ns: NOW, prime_redirected: false })
    }

    fn texts(scene: &Scene) -> impl Iterator<Item = &str> {
        scene.commands().iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn circles(scene: &Scene) -> impl Iterator<Item = (Point, Rgb888)> + '_ {
        scene.commands().iter().filter_map(|c| match c {
            DrawCmd::Circle { top_left, color, .. } => Some((*top_left, *color)),
            _ => None,
        })
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    #[test]
    fn test_battery_fill_width() {
        assert_eq!(battery_fill_width(62), 47, "0.62 * 76 = 47.12, truncated");
        assert_eq!(battery_fill_width(0), 0);
        assert_eq!(battery_fill_width(100), BATTERY_FILL_MAX_WIDTH);
        assert_eq!(battery_fill_width(255), BATTERY_FILL_MAX_WIDTH, "Clamped at 100%");
    }

    #[test]
    fn test_battery_fill_monotonic() {
        let mut prev = 0;
        for p in 0..=100u8 {
            let w = battery_fill_width(p);
            assert!(w >= prev, "Fill width shrank at {p}%");
            prev = w;
        }
    }

    #[test]
    fn test_battery_text() {
        assert_eq!(battery_text(62).as_str(), "62%");
        assert_eq!(battery_text(100).as_str(), "100%");
        assert_eq!(battery_text(0).as_str(), "0%");
    }

    #[test]
    fn test_network_text_wifi_address() {
        let state = state();
        let shows = PlatformCaps { shows_wifi_address: true };
        let hides = PlatformCaps { shows_wifi_address: false };
        assert_eq!(network_text(&state, shows), "192.168.1.5");
        assert_eq!(network_text(&state, hides), "WIFI");
    }

    #[test]
    fn test_network_text_non_wifi_uses_label() {
        let mut state = state();
        state.network_type = NetworkType::Cell3G;
        state.network_label = NetworkType::Cell3G.label();
        let shows = PlatformCaps { shows_wifi_address: true };
        assert_eq!(network_text(&state, shows), "CELL3G");
    }

    #[test]
    fn test_signal_circle_spacing() {
        assert_eq!(signal_circle_origin(0), Point::new(58, 196));
        assert_eq!(signal_circle_origin(1), Point::new(95, 196));
        assert_eq!(signal_circle_origin(4), Point::new(206, 196));
    }

    #[test]
    fn test_line_centers_symmetric() {
        let area = Rectangle::new(Point::new(0, 100), Size::new(10, 140));
        let centers: std::vec::Vec<i32> = line_centers(area, 2, Font::Label).collect();
        assert_eq!(centers.len(), 2);
        let mid = (centers[0] + centers[1]) / 2;
        assert!((mid - area.center().y).abs() <= 1, "Two lines should straddle the center");
        assert_eq!(centers[1] - centers[0], Font::Label.line_height() as i32);

        let one: std::vec::Vec<i32> = line_centers(area, 1, Font::Label).collect();
        assert_eq!(one, [area.center().y], "A single line sits on the center");

        assert_eq!(line_centers(area, 0, Font::Label).count(), 0);
    }

    #[test]
    fn test_single_label_line_matches_network_text_center() {
        // 140 px card: center() rounds down to 169, labels must not drift to 170
        let area = Rectangle::new(Point::new(0, 100), Size::new(10, 140));
        assert_eq!(area.center().y, 169);
        for font in [Font::Label, Font::Small] {
            let one: std::vec::Vec<i32> = line_centers(area, 1, font).collect();
            assert_eq!(one, [169], "{font:?} single line is off center");
        }
        let odd = Rectangle::new(Point::new(0, 0), Size::new(10, 141));
        let one: std::vec::Vec<i32> = line_centers(odd, 1, Font::Label).collect();
        assert_eq!(one, [odd.center().y]);
    }

    #[test]
    fn test_three_lines_fit_in_card() {
        let label = card_label_area(card_area(0));
        let half = Font::Label.mono().character_size.height as i32 / 2;
        for y in line_centers(label, 3, Font::Label) {
            assert!(y - half >= label.top_left.y, "Line at {y} clips the card top");
            assert!(y + half <= label.top_left.y + label.size.height as i32, "Line at {y} clips the card bottom");
        }
    }

    // -------------------------------------------------------------------------
    // Scene
    // -------------------------------------------------------------------------

    #[test]
    fn test_settings_button_unknown_until_paint() {
        let mut renderer = Renderer::new(PlatformCaps::default());
        assert_eq!(renderer.settings_button(), None);
        renderer.paint(&state());
        assert_eq!(renderer.settings_button(), Some(SETTINGS_BUTTON));
    }

    #[test]
    fn test_scene_starts_with_background() {
        let scene = Renderer::new(PlatformCaps::default()).paint(&state());
        assert_eq!(scene.commands()[0], DrawCmd::Fill { area: PANEL_AREA, color: BACKGROUND });
        assert!(scene.len() < SCENE_CAPACITY, "Scene should not hit capacity");
    }

    #[test]
    fn test_settings_icon_dimmed() {
        let scene = Renderer::new(PlatformCaps::default()).paint(&state());
        let settings = scene.commands().iter().find_map(|c| match c {
            DrawCmd::Icon { icon: IconId::Settings, area, opacity } => Some((*area, *opacity)),
            _ => None,
        });
        assert_eq!(settings, Some((SETTINGS_BUTTON, SETTINGS_OPACITY)));
    }

    #[test]
    fn test_signal_gauge_lit_segments() {
        let scene = Renderer::new(PlatformCaps::default()).paint(&state());
        let colors: std::vec::Vec<Rgb888> = circles(&scene).map(|(_, c)| c).collect();
        assert_eq!(colors, [GAUGE_ON, GAUGE_ON, GAUGE_ON, GAUGE_ON, GAUGE_OFF], "Raw strength 3 lights 4");
    }

    #[test]
    fn test_signal_gauge_all_off_without_signal() {
        let mut state = state();
        state.strength_bars = 0;
        let scene = Renderer::new(PlatformCaps::default()).paint(&state);
        assert!(circles(&scene).all(|(_, c)| c == GAUGE_OFF));
        assert_eq!(circles(&scene).count(), 5);
    }

    #[test]
    fn test_battery_commands() {
        let scene = Renderer::new(PlatformCaps::default()).paint(&state());
        let fill = scene.commands().iter().find_map(|c| match c {
            DrawCmd::Fill { area, color } if *color == BATTERY_FILL => Some(*area),
            _ => None,
        });
        assert_eq!(fill, Some(Rectangle::new(BATTERY_FILL_ORIGIN, Size::new(47, BATTERY_FILL_HEIGHT))));
        assert!(texts(&scene).any(|t| t == "62%"));

        let fill_idx = scene.commands().iter().position(|c| matches!(c, DrawCmd::Fill { color, .. } if *color == BATTERY_FILL));
        let icon_idx = scene.commands().iter().position(|c| matches!(c, DrawCmd::Icon { icon: IconId::Battery, .. }));
        assert!(fill_idx < icon_idx, "Fill bar must be drawn beneath the icon");
    }

    #[test]
    fn test_battery_icon_variant() {
        let mut state = state();
        state.is_charging = true;
        let scene = Renderer::new(PlatformCaps::default()).paint(&state);
        assert!(scene.commands().iter().any(|c| matches!(c, DrawCmd::Icon { icon: IconId::BatteryCharging, .. })));
        assert!(!scene.commands().iter().any(|c| matches!(c, DrawCmd::Icon { icon: IconId::Battery, .. })));
    }

    #[test]
    fn test_empty_battery_has_no_fill() {
        let mut state = state();
        state.battery_percent = 0;
        let scene = Renderer::new(PlatformCaps::default()).paint(&state);
        assert!(!scene.commands().iter().any(|c| matches!(c, DrawCmd::Fill { color, .. } if *color == BATTERY_FILL)));
        assert!(texts(&scene).any(|t| t == "0%"));
    }

    #[test]
    fn test_network_line_follows_caps() {
        let state = state();
        let scene = Renderer::new(PlatformCaps { shows_wifi_address: true }).paint(&state);
        assert!(texts(&scene).any(|t| t == "192.168.1.5"));
        assert!(!texts(&scene).any(|t| t == "WIFI"));

        let scene = Renderer::new(PlatformCaps { shows_wifi_address: false }).paint(&state);
        assert!(texts(&scene).any(|t| t == "WIFI"));
        assert!(!texts(&scene).any(|t| t == "192.168.1.5"));
    }

    #[test]
    fn test_cards_stacked_with_severity_accents() {
        let scene = Renderer::new(PlatformCaps::default()).paint(&state());
        let accents: std::vec::Vec<(i32, Option<Rgb888>)> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::RoundedBox { area, fill: Some(fill), .. } => Some((area.top_left.y, Some(*fill))),
                _ => None,
            })
            .collect();
        // Thermal elevated, GPS searching, connectivity online
        assert_eq!(
            accents,
            [(CARD_Y[0] + 6, Some(WARNING)), (CARD_Y[1] + 6, Some(WARNING)), (CARD_Y[2] + 6, Some(GOOD))]
        );
    }

    #[test]
    fn test_card_outlines() {
        let scene = Renderer::new(PlatformCaps::default()).paint(&state());
        let outlines: std::vec::Vec<Rectangle> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::RoundedBox { area, stroke: Some(CARD_BORDER), stroke_width: CARD_BORDER_WIDTH, fill: None, .. } => Some(*area),
                _ => None,
            })
            .collect();
        assert_eq!(outlines, [card_area(0), card_area(1), card_area(2)]);
    }

    #[test]
    fn test_card_labels_present() {
        let mut state = state();
        state.connectivity = StatusItem::new(crate::status::Severity::Danger, &["CONNECT", "ERROR"]);
        let scene = Renderer::new(PlatformCaps::default()).paint(&state);
        let all: std::vec::Vec<&str> = texts(&scene).collect();
        for expected in ["52.0°C", "OK", "CPU", "GPS", "SEARCHING", "CONNECT", "ERROR"] {
            assert!(all.contains(&expected), "Missing label line {expected}");
        }
        assert!(scene.commands().iter().any(|c| matches!(c, DrawCmd::RoundedBox { fill: Some(DANGER), .. })));
    }

    #[test]
    fn test_paint_deterministic() {
        let state = state();
        let mut renderer = Renderer::new(PlatformCaps { shows_wifi_address: true });
        assert_eq!(renderer.paint(&state), renderer.paint(&state));
    }
}
