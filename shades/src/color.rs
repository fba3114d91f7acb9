//! Color value types: hex, normalized RGB and HSL.
//!
//! ## Rust Lesson #2: Newtypes
//!
//! `HexColor([u8; 3])` wraps a plain array in its own type. The compiler
//! then refuses to mix it up with any other `[u8; 3]`, and parsing happens
//! exactly once, in `FromStr`. After that every `HexColor` is valid.

use std::fmt;
use std::str::FromStr;

use crate::error::{FormatIssue, ShadeError};

/// An 8-bit-per-channel color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub [u8; 3]);

/// RGB channels normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor([0, 0, 0]);
    pub const WHITE: HexColor = HexColor([255, 255, 255]);

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        HexColor([r, g, b])
    }

    pub fn red(&self) -> u8 {
        self.0[0]
    }

    pub fn green(&self) -> u8 {
        self.0[1]
    }

    pub fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Normalize to [0, 1] channels.
    pub fn to_rgb(self) -> Rgb {
        let [r, g, b] = self.0;
        Rgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Largest per-channel difference between two colors.
    pub fn max_channel_diff(&self, other: &HexColor) -> u8 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0)
    }
}

/// Strip whitespace and any leading `#`, then check for exactly 6 hex digits.
///
/// Returns the bare digits on success.
pub fn normalize_hex(input: &str) -> Result<&str, ShadeError> {
    let digits = input.trim().trim_start_matches('#');

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ShadeError::color(input, FormatIssue::NotHex(bad)));
    }
    if digits.len() != 6 {
        return Err(ShadeError::color(input, FormatIssue::WrongLength(digits.len())));
    }
    Ok(digits)
}

impl FromStr for HexColor {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = normalize_hex(s)?;

        // normalize_hex guarantees 6 ASCII hex digits, so slicing by byte is safe.
        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            let group = &digits[i * 2..i * 2 + 2];
            *channel = u8::from_str_radix(group, 16).map_err(|_| {
                let bad = group.chars().next().unwrap_or('?');
                ShadeError::color(s, FormatIssue::NotHex(bad))
            })?;
        }
        Ok(HexColor(channels))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Largest channel value.
    pub fn max(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel value.
    pub fn min(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Same hue and saturation with a different lightness.
    pub fn with_lightness(self, lightness: f64) -> Self {
        Self { lightness, ..self }
    }
}
