//! Error type for color parsing and shade generation.
//!
//! ## Rust Lesson #3: Enums Carry Data
//!
//! A Rust `enum` is closer to a tagged union than a JS string constant.
//! Each variant can hold its own fields, so one error type can describe
//! "bad color" and "bad shade value" with exactly the context each needs.

use std::fmt;

/// Why a hex color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Not exactly 6 digits after stripping `#`. Holds the digit count.
    WrongLength(usize),
    /// A character outside `0-9a-fA-F`.
    NotHex(char),
}

/// Why a shade request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueIssue {
    NotAnInteger,
    OutOfRange(i64),
}

/// Errors produced by the shade engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadeError {
    /// The base color is not a 6-digit hex code. Aborts the whole batch.
    InvalidColorFormat { input: String, issue: FormatIssue },
    /// A single shade request is unusable. Only that entry is skipped.
    InvalidShadeValue { input: String, issue: ValueIssue },
}

impl ShadeError {
    pub(crate) fn color(input: &str, issue: FormatIssue) -> Self {
        ShadeError::InvalidColorFormat {
            input: input.to_string(),
            issue,
        }
    }

    pub(crate) fn value(input: impl ToString, issue: ValueIssue) -> Self {
        ShadeError::InvalidShadeValue {
            input: input.to_string(),
            issue,
        }
    }

    /// True for errors that invalidate the base color rather than one shade.
    pub fn is_color_format(&self) -> bool {
        matches!(self, ShadeError::InvalidColorFormat { .. })
    }
}

impl fmt::Display for ShadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeError::InvalidColorFormat { input, issue } => match issue {
                FormatIssue::WrongLength(n) => write!(
                    f,
                    "Invalid color code '{}': expected 6 hex digits, got {}",
                    input, n
                ),
                FormatIssue::NotHex(c) => write!(
                    f,
                    "Invalid color code '{}': '{}' is not a hexadecimal digit",
                    input, c
                ),
            },
            ShadeError::InvalidShadeValue { input, issue } => match issue {
                ValueIssue::NotAnInteger => write!(f, "Invalid shade value: {}", input),
                ValueIssue::OutOfRange(_) => write!(
                    f,
                    "Invalid shade value: {} (must be between 0 and 100)",
                    input
                ),
            },
        }
    }
}

impl std::error::Error for ShadeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_input() {
        let err = ShadeError::color("#12345", FormatIssue::WrongLength(5));
        assert!(err.to_string().contains("#12345"));
        assert!(err.to_string().contains("got 5"));

        let err = ShadeError::value("bad", ValueIssue::NotAnInteger);
        assert_eq!(err.to_string(), "Invalid shade value: bad");
    }

    #[test]
    fn color_errors_are_distinguishable() {
        assert!(ShadeError::color("x", FormatIssue::NotHex('x')).is_color_format());
        assert!(!ShadeError::value(150, ValueIssue::OutOfRange(150)).is_color_format());
    }
}
