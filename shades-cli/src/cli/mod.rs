//! CLI command implementations.
//!
//! This module contains the pieces around the shade engine:
//! - `generate` - Default command: shades for one or more colors
//! - `recipe` - Run a YAML recipe
//! - `table` - Console table with colored swatches
//! - `render` - Swatch image rendering (SVG -> resvg -> PNG)
//! - `report` - Markdown and JSON summaries
//! - `output` - Collision-safe output file naming

pub mod error;
pub mod generate;
pub mod output;
pub mod recipe;
pub mod render;
pub mod report;
pub mod table;

pub use generate::cmd_generate;
pub use recipe::cmd_recipe;
