//! Shade generation: darken a base color by scaling its HSL lightness.
//!
//! ## Rust Lesson #4: TryFrom for Validation
//!
//! `Percent` can only be built through `TryFrom`, so a value that exists is
//! already known to be in 0..=100. Callers can pass integers or strings and
//! the conversion decides, once, whether the request is usable:
//!
//! ```
//! use shades::Percent;
//!
//! assert!(Percent::try_from(40).is_ok());
//! assert!(Percent::try_from("bad").is_err());
//! ```

use std::fmt;

use crate::color::{HexColor, Hsl};
use crate::convert::{hsl_to_hex, rgb_to_hsl};
use crate::error::{ShadeError, ValueIssue};

/// Shades produced when the caller does not ask for specific ones.
pub const DEFAULT_SHADES: [u8; 5] = [20, 40, 60, 80, 100];

/// How much to darken, from 0 (unchanged) to 100 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const MAX: u8 = 100;

    pub fn value(self) -> u8 {
        self.0
    }

    /// Multiplier applied to lightness.
    pub fn factor(self) -> f64 {
        1.0 - self.0 as f64 / 100.0
    }

    fn checked(raw: i64, input: impl ToString) -> Result<Self, ShadeError> {
        if (0..=Self::MAX as i64).contains(&raw) {
            Ok(Percent(raw as u8))
        } else {
            Err(ShadeError::value(input, ValueIssue::OutOfRange(raw)))
        }
    }
}

macro_rules! percent_from_int {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Percent {
                type Error = ShadeError;

                fn try_from(raw: $t) -> Result<Self, Self::Error> {
                    let wide = i64::try_from(raw)
                        .map_err(|_| ShadeError::value(raw, ValueIssue::OutOfRange(i64::MAX)))?;
                    Percent::checked(wide, raw)
                }
            }
        )*
    };
}

percent_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl TryFrom<&str> for Percent {
    type Error = ShadeError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let trimmed = input.trim();
        // Accept a trailing percent sign, since "20%" is how the table prints it.
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let raw: i64 = digits
            .parse()
            .map_err(|_| ShadeError::value(input, ValueIssue::NotAnInteger))?;
        Percent::checked(raw, input)
    }
}

impl TryFrom<&String> for Percent {
    type Error = ShadeError;

    fn try_from(input: &String) -> Result<Self, Self::Error> {
        Percent::try_from(input.as_str())
    }
}

impl TryFrom<String> for Percent {
    type Error = ShadeError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Percent::try_from(input.as_str())
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A generated shade and the percentage it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub percent: Percent,
    pub color: HexColor,
}

/// The outcome of one batch: every request in the order it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeBatch {
    pub base: HexColor,
    pub base_hsl: Hsl,
    pub entries: Vec<Result<Shade, ShadeError>>,
}

impl ShadeBatch {
    /// Successful shades, in request order.
    pub fn shades(&self) -> impl Iterator<Item = &Shade> {
        self.entries.iter().filter_map(|e| e.as_ref().ok())
    }

    /// Rejected requests, in request order.
    pub fn errors(&self) -> impl Iterator<Item = &ShadeError> {
        self.entries.iter().filter_map(|e| e.as_ref().err())
    }

    pub fn shade_count(&self) -> usize {
        self.shades().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Darken `base` by `percent`: lightness is multiplied by `1 - percent/100`.
///
/// Hue and saturation stay fixed, so 100% is always black and 0% returns the
/// base color up to truncation.
pub fn generate_shade(base: &Hsl, percent: Percent) -> HexColor {
    let lightness = base.lightness * percent.factor();
    hsl_to_hex(base.with_lightness(lightness))
}

/// Generate one shade per request, keeping the caller's order.
///
/// A request that fails validation is recorded as an error entry and the
/// rest of the batch carries on.
pub fn generate_shades<I>(base: HexColor, requests: I) -> ShadeBatch
where
    I: IntoIterator,
    I::Item: TryInto<Percent, Error = ShadeError>,
{
    let base_hsl = rgb_to_hsl(base.to_rgb());

    let entries = requests
        .into_iter()
        .map(|request| -> Result<Shade, ShadeError> {
            let percent: Percent = request.try_into()?;
            Ok(Shade {
                percent,
                color: generate_shade(&base_hsl, percent),
            })
        })
        .collect();

    ShadeBatch {
        base,
        base_hsl,
        entries,
    }
}

/// Parse `hex` and generate all requested shades.
///
/// A malformed base color aborts with `InvalidColorFormat`; bad shade values
/// only affect their own entries.
pub fn hex_to_shades<I>(hex: &str, requests: I) -> Result<ShadeBatch, ShadeError>
where
    I: IntoIterator,
    I::Item: TryInto<Percent, Error = ShadeError>,
{
    let base: HexColor = hex.parse()?;
    Ok(generate_shades(base, requests))
}

/// Split a comma-separated shade list such as `"20,40,60"`.
///
/// Segments are trimmed but otherwise passed through untouched, so an empty
/// or non-numeric segment shows up later as an invalid value instead of
/// vanishing.
pub fn parse_shade_list(list: &str) -> Vec<&str> {
    list.split(',').map(str::trim).collect()
}
