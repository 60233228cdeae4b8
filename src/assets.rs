//! Icon assets.
//!
//! Icons are 24-bit BMP files decoded once at startup into owned pixel
//! buffers, so the backend can scale and blend them without re-parsing.
//! Pixels of exactly [`TRANSPARENT_KEY`](sidebar_common::colors::TRANSPARENT_KEY)
//! are treated as transparent when drawn.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use sidebar_common::IconId;
use thiserror::Error;
use tinybmp::Bmp;

pub const SETTINGS_FILE: &str = "button_settings.bmp";
pub const HOME_FILE: &str = "button_home.bmp";
pub const BATTERY_FILE: &str = "battery.bmp";
pub const BATTERY_CHARGING_FILE: &str = "battery_charging.bmp";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {reason:?}", path.display())]
    Decode { path: PathBuf, reason: tinybmp::ParseError },
}

/// Decoded icon: row-major pixels, `size.width * size.height` long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl Icon {
    /// Decode BMP bytes. `path` only labels the error.
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Self, AssetError> {
        let bmp = Bmp::<Rgb888>::from_slice(bytes).map_err(|reason| AssetError::Decode { path: path.to_path_buf(), reason })?;
        let size = bmp.size();

        let mut pixels = vec![Rgb888::BLACK; (size.width * size.height) as usize];
        for Pixel(p, color) in bmp.pixels() {
            if let Some(slot) = pixel_index(size, p).and_then(|i| pixels.get_mut(i)) {
                *slot = color;
            }
        }
        Ok(Self { size, pixels })
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let bytes = fs::read(path).map_err(|source| AssetError::Read { path: path.to_path_buf(), source })?;
        Self::decode(path, &bytes)
    }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    /// Pixel at `p`, `None` outside the icon.
    #[inline]
    pub fn pixel(&self, p: Point) -> Option<Rgb888> { pixel_index(self.size, p).and_then(|i| self.pixels.get(i).copied()) }
}

fn pixel_index(size: Size, p: Point) -> Option<usize> {
    let (x, y) = (u32::try_from(p.x).ok()?, u32::try_from(p.y).ok()?);
    (x < size.width && y < size.height).then(|| (y * size.width + x) as usize)
}

/// Every icon the renderer can reference.
#[derive(Clone, Debug)]
pub struct Assets {
    settings: Icon,
    home: Icon,
    battery: Icon,
    battery_charging: Icon,
}

impl Assets {
    /// Load all icons from `dir`. The first failure aborts the load.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let load = |file: &str| Icon::load(&dir.join(file));
        let assets = Self {
            settings: load(SETTINGS_FILE)?,
            home: load(HOME_FILE)?,
            battery: load(BATTERY_FILE)?,
            battery_charging: load(BATTERY_CHARGING_FILE)?,
        };
        tracing::debug!(dir = %dir.display(), "icons loaded");
        Ok(assets)
    }

    pub const fn icon(&self, id: IconId) -> &Icon {
        match id {
            IconId::Settings => &self.settings,
            IconId::Home => &self.home,
            IconId::Battery => &self.battery,
            IconId::BatteryCharging => &self.battery_charging,
        }
    }
}
