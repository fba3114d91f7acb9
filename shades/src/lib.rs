//! # shades
//!
//! Color shade engine: hex <-> RGB <-> HSL conversion and lightness-based
//! shade generation. Pure functions only; rendering and file output live in
//! the `shades-cli` crate.
//!
//! ## Rust Lesson #1: Crate Roots and Re-exports
//!
//! `lib.rs` is the crate root. Each `pub mod` line pulls in one file, and the
//! `pub use` lines lift the everyday types up here so callers can write
//! `shades::HexColor` instead of `shades::color::HexColor`. The lessons in
//! this crate continue in `color.rs` (#2), `error.rs` (#3) and `shade.rs` (#4).
//!
//! ```
//! let batch = shades::hex_to_shades("#FF0000", [50]).unwrap();
//! let first = batch.shades().next().unwrap();
//! assert_eq!(first.color.to_string(), "#7F0000");
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod shade;

// Re-export common types at crate root for convenience.
pub use color::{HexColor, Hsl, Rgb, normalize_hex};
pub use convert::{hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};
pub use error::{FormatIssue, ShadeError, ValueIssue};
pub use shade::{
    DEFAULT_SHADES, Percent, Shade, ShadeBatch, generate_shade, generate_shades, hex_to_shades,
    parse_shade_list,
};
