//! Fonts and text alignment used by the panel.
//!
//! Scene text commands name a [`Font`] rather than holding a `MonoFont`
//! reference, which keeps commands small and comparable. The backend and the
//! renderer's line layout resolve it through [`Font::mono`].

use embedded_graphics::{
    mono_font::MonoFont,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

/// Card labels and the network line (`ProFont` 24pt).
pub const LABEL_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Battery percentage (`ProFont` 18pt).
pub const SMALL_FONT: &MonoFont<'static> = &PROFONT_18_POINT;

/// Extra spacing between lines of a multi-line label.
pub const LINE_SPACING: u32 = 6;

/// Font selector carried by scene text commands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Font {
    Label,
    Small,
}

impl Font {
    #[inline]
    pub fn mono(self) -> &'static MonoFont<'static> {
        match self {
            Self::Label => LABEL_FONT,
            Self::Small => SMALL_FONT,
        }
    }

    /// Distance between baselines of consecutive lines.
    #[inline]
    pub fn line_height(self) -> u32 { self.mono().character_size.height + LINE_SPACING }
}

/// Text style for a scene text command. Positions are line centers vertically.
#[inline]
pub fn text_style(alignment: Alignment) -> TextStyle {
    TextStyleBuilder::new().alignment(alignment).baseline(Baseline::Middle).build()
}
