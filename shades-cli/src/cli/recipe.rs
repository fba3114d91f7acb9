//! Shade recipes: a YAML file describing a whole run.
//!
//! ```yaml
//! name: brand
//! directory: palettes
//! shades: [10, 50, 90]
//! colors: ["#E63946", "2A9D8F"]
//! layout:
//!   cell_width: 120
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::CliError;
use super::generate::{GenerateOptions, default_shade_requests, run};
use super::render::{LayoutOverrides, SwatchLayout};

/// A complete recipe file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// File name stem for every color's outputs
    #[serde(default)]
    pub name: Option<String>,

    /// Output directory, relative to the recipe file
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Shade percentages (default: 20, 40, 60, 80, 100)
    #[serde(default)]
    pub shades: Option<Vec<ShadeValue>>,

    /// Base colors, processed in order
    pub colors: Vec<String>,

    /// Swatch image layout
    #[serde(default)]
    pub layout: LayoutOverrides,
}

/// A shade entry as written in YAML: `50` or `"50"`.
///
/// Anything else (floats, bools, null, nested values) lands in `Other` so it
/// is rejected per entry by the engine instead of failing the whole recipe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShadeValue {
    Number(i64),
    Text(String),
    Other(serde_yaml::Value),
}

impl ShadeValue {
    /// Textual request handed to the engine, which does the validation.
    fn as_request(&self) -> String {
        match self {
            ShadeValue::Number(n) => n.to_string(),
            ShadeValue::Text(s) => s.clone(),
            ShadeValue::Other(value) => match value {
                serde_yaml::Value::Null => "null".to_string(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                other => serde_yaml::to_string(other)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_else(|_| format!("{:?}", other)),
            },
        }
    }
}

impl Recipe {
    /// Parse a recipe from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, CliError> {
        serde_yaml::from_str(content)
            .map_err(|e| CliError::Recipe(format!("Failed to parse recipe YAML: {}", e)))
    }

    /// Load a recipe from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| CliError::io(path.as_ref(), e))?;
        Self::from_yaml(&content)
    }

    /// Turn the recipe into run options. `base_dir` anchors a relative output directory.
    pub fn to_options(&self, base_dir: &Path) -> GenerateOptions {
        let shades = match &self.shades {
            Some(values) => values.iter().map(ShadeValue::as_request).collect(),
            None => default_shade_requests(),
        };

        let directory = match &self.directory {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => base_dir.join(dir),
            None => base_dir.to_path_buf(),
        };

        GenerateOptions {
            colors: self.colors.clone(),
            shades,
            directory,
            name: self.name.clone(),
            layout: SwatchLayout::default().with_overrides(&self.layout),
            ..Default::default()
        }
    }
}

/// Execute the recipe command. Returns the process exit code.
pub fn cmd_recipe(args: &[String]) -> i32 {
    let mut recipe_path: Option<&str> = None;
    let mut extra: Vec<String> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return 0;
            }
            _ if recipe_path.is_none() && !arg.starts_with('-') => recipe_path = Some(arg.as_str()),
            _ => extra.push(arg.clone()),
        }
    }

    let Some(recipe_path) = recipe_path else {
        print_usage();
        return 2;
    };

    let recipe = match Recipe::load(recipe_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let base_dir = Path::new(recipe_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut opts = recipe.to_options(&base_dir);

    // Output flags still apply on top of a recipe.
    for flag in &extra {
        match flag.as_str() {
            "--json" => opts.json = true,
            "--no-files" => opts.write_files = false,
            "--no-color" => opts.color_output = Some(false),
            "-q" | "--quiet" => opts.quiet = true,
            other => eprintln!("Warning: Ignoring option '{}' for recipe", other),
        }
    }

    if !opts.quiet {
        eprintln!("Recipe: {} ({} colors)", recipe_path, opts.colors.len());
    }

    run(&opts).exit_code()
}

fn print_usage() {
    eprintln!("Usage: shades recipe <file.yaml> [--json] [--no-files] [--no-color] [-q]");
    eprintln!();
    eprintln!("Recipe fields:");
    eprintln!("  colors:    list of hex colors (required)");
    eprintln!("  shades:    list of percentages (default: [20, 40, 60, 80, 100])");
    eprintln!("  directory: output directory, relative to the recipe (default: recipe's folder)");
    eprintln!("  name:      file name stem (default: shades)");
    eprintln!("  layout:    cell_width, swatch_height, image_height, label_x, label_y");
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r##"
name: brand
directory: palettes
shades: [10, "50", bad, 90]
colors:
  - "#E63946"
  - 2A9D8F
layout:
  cell_width: 120
"##;

    #[test]
    fn parses_full_recipe() {
        let recipe = Recipe::from_yaml(FULL).unwrap();
        assert_eq!(recipe.name.as_deref(), Some("brand"));
        assert_eq!(recipe.colors, vec!["#E63946", "2A9D8F"]);
        assert_eq!(
            recipe.shades.as_deref(),
            Some(
                &[
                    ShadeValue::Number(10),
                    ShadeValue::Text("50".to_string()),
                    ShadeValue::Text("bad".to_string()),
                    ShadeValue::Number(90),
                ][..]
            )
        );
        assert_eq!(recipe.layout.cell_width, Some(120));
    }

    #[test]
    fn options_resolve_relative_directory() {
        let recipe = Recipe::from_yaml(FULL).unwrap();
        let opts = recipe.to_options(Path::new("/work/recipes"));
        assert_eq!(opts.directory, PathBuf::from("/work/recipes/palettes"));
        assert_eq!(opts.shades, vec!["10", "50", "bad", "90"]);
        assert_eq!(opts.layout.cell_width, 120);
        assert_eq!(opts.layout.image_height, 100);
        assert_eq!(opts.name.as_deref(), Some("brand"));
    }

    #[test]
    fn minimal_recipe_uses_defaults() {
        let recipe = Recipe::from_yaml("colors: [\"#FF0000\"]").unwrap();
        let opts = recipe.to_options(Path::new("here"));
        assert_eq!(opts.shades, default_shade_requests());
        assert_eq!(opts.directory, PathBuf::from("here"));
        assert_eq!(opts.layout, SwatchLayout::default());
    }

    #[test]
    fn odd_shade_values_fail_per_entry() {
        let recipe =
            Recipe::from_yaml("shades: [10, 12.5, true, 90]\ncolors: [\"#FF0000\"]").unwrap();
        let opts = recipe.to_options(Path::new("."));
        assert_eq!(opts.shades, vec!["10", "12.5", "true", "90"]);

        let batch = shades::hex_to_shades(&opts.colors[0], &opts.shades).unwrap();
        let good: Vec<u8> = batch.shades().map(|s| s.percent.value()).collect();
        assert_eq!(good, vec![10, 90]);
        assert_eq!(batch.errors().count(), 2);
    }

    #[test]
    fn null_and_huge_shade_values_do_not_break_parsing() {
        let recipe = Recipe::from_yaml(
            "shades: [~, 99999999999999999999, [1, 2], 50]\ncolors: [\"#00FF00\"]",
        )
        .unwrap();
        let opts = recipe.to_options(Path::new("."));
        assert_eq!(opts.shades.len(), 4);

        let batch = shades::hex_to_shades(&opts.colors[0], &opts.shades).unwrap();
        assert_eq!(batch.shade_count(), 1);
        assert_eq!(batch.errors().count(), 3);
    }

    #[test]
    fn rejects_unknown_fields_and_missing_colors() {
        assert!(matches!(Recipe::from_yaml("colours: [red]"), Err(CliError::Recipe(_))));
        assert!(matches!(
            Recipe::from_yaml("colors: [\"#FF0000\"]\nlayout:\n  width: 3"),
            Err(CliError::Recipe(_))
        ));
    }
}
