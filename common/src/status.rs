//! Severity tiers and classified status items.
//!
//! A [`StatusItem`] is what a status card shows: one to three short text
//! lines and a [`Severity`] that picks the accent color. Items are built once
//! per tick by the classifier and never mutated afterwards.

use heapless::{String, Vec};

/// Maximum number of text lines on a status card.
pub const MAX_LABEL_LINES: usize = 3;

/// Capacity of a single label line in bytes.
pub const LABEL_LINE_LEN: usize = 24;

/// One line of a status card label.
pub type LabelLine = String<LABEL_LINE_LEN>;

/// Severity tier of a classified dimension.
///
/// Ordered from least to most severe, so `max()` picks the worse of two tiers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    Good,
    Warning,
    Danger,
}

/// A classified status: label lines plus severity.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatusItem {
    lines: Vec<LabelLine, MAX_LABEL_LINES>,
    severity: Severity,
}

impl StatusItem {
    /// Build an item from up to [`MAX_LABEL_LINES`] lines.
    ///
    /// Extra lines are dropped and over-long lines are cut at a character
    /// boundary. Classifier labels are all well inside both limits.
    pub fn new(severity: Severity, lines: &[&str]) -> Self {
        let mut out = Vec::new();
        for line in lines.iter().take(MAX_LABEL_LINES) {
            let _ = out.push(truncated(line));
        }
        Self { lines: out, severity }
    }

    #[inline]
    pub const fn severity(&self) -> Severity { self.severity }

    /// Label lines, top to bottom.
    #[inline]
    pub fn lines(&self) -> &[LabelLine] { &self.lines }

    /// Compare the label against plain string lines.
    pub fn label_is(&self, expected: &[&str]) -> bool {
        self.lines.len() == expected.len() && self.lines.iter().zip(expected).all(|(a, b)| a.as_str() == *b)
    }
}

/// Copy `src` into a bounded string, stopping at the last whole character that fits.
pub fn truncated<const N: usize>(src: &str) -> String<N> {
    let mut out = String::new();
    for ch in src.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
