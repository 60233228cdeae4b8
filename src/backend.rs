//! Drawing backend: executes a [`Scene`] on an `Rgb888` draw target.
//!
//! Commands are drawn in order with embedded-graphics primitives. Draw
//! errors are ignored per primitive (`.ok()`); the simulator display is
//! infallible.
//!
//! # Icons
//!
//! Icons are scaled nearest-neighbour to their target rect. Pixels equal to
//! [`TRANSPARENT_KEY`] are skipped, and icons drawn below full opacity are
//! blended against the panel background rather than against whatever is
//! underneath, which is the background anyway at every icon position.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, PointsIter, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment},
    text::Text,
};
use sidebar_common::{
    DrawCmd,
    Scene,
    colors::{BACKGROUND, TRANSPARENT_KEY, blend},
    styles::text_style,
};

use crate::assets::{Assets, Icon};

/// Draw every command of `scene` onto `target`.
pub fn draw_scene<D>(target: &mut D, scene: &Scene, assets: &Assets)
where
    D: DrawTarget<Color = Rgb888>,
{
    for cmd in scene.commands() {
        draw_cmd(target, cmd, assets);
    }
}

fn draw_cmd<D>(target: &mut D, cmd: &DrawCmd, assets: &Assets)
where
    D: DrawTarget<Color = Rgb888>,
{
    match cmd {
        DrawCmd::Fill { area, color } => {
            area.into_styled(PrimitiveStyle::with_fill(*color)).draw(target).ok();
        }
        DrawCmd::Circle { top_left, diameter, color } => {
            Circle::new(*top_left, *diameter)
                .into_styled(PrimitiveStyle::with_fill(*color))
                .draw(target)
                .ok();
        }
        DrawCmd::RoundedBox { area, corners, fill, stroke, stroke_width } => {
            let mut style = PrimitiveStyleBuilder::new().stroke_alignment(StrokeAlignment::Inside);
            if let Some(fill) = fill {
                style = style.fill_color(*fill);
            }
            if let Some(stroke) = stroke {
                style = style.stroke_color(*stroke).stroke_width(*stroke_width);
            }
            RoundedRectangle::new(*area, *corners)
                .into_styled(style.build())
                .draw(target)
                .ok();
        }
        DrawCmd::Icon { icon, area, opacity } => {
            draw_icon(target, assets.icon(*icon), *area, *opacity);
        }
        DrawCmd::Text { text, position, font, alignment, color } => {
            Text::with_text_style(text, *position, MonoTextStyle::new(font.mono(), *color), text_style(*alignment))
                .draw(target)
                .ok();
        }
    }
}

/// Source pixel for destination offset `d` when stretching `src` pixels over `dst`.
#[inline]
const fn scale_coord(d: u32, src: u32, dst: u32) -> i32 { (d as u64 * src as u64 / dst as u64) as i32 }

/// Draw `icon` stretched over `area`.
pub fn draw_icon<D>(target: &mut D, icon: &Icon, area: Rectangle, opacity: u8)
where
    D: DrawTarget<Color = Rgb888>,
{
    let src = icon.size();
    let dst = area.size;
    if src.width == 0 || src.height == 0 || dst.width == 0 || dst.height == 0 || opacity == 0 {
        return;
    }

    let pixels = area.points().filter_map(|p| {
        let d = p - area.top_left;
        let sample = Point::new(scale_coord(d.x as u32, src.width, dst.width), scale_coord(d.y as u32, src.height, dst.height));
        let color = icon.pixel(sample)?;
        if color == TRANSPARENT_KEY {
            return None;
        }
        let color = if opacity == u8::MAX { color } else { blend(color, BACKGROUND, opacity) };
        Some(Pixel(p, color))
    });
    target.draw_iter(pixels).ok();
}
