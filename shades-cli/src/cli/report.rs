//! Markdown and JSON summaries of a shade batch.

use serde::Serialize;
use shades::ShadeBatch;

/// Markdown list of every generated shade, in request order.
pub fn markdown_report(batch: &ShadeBatch) -> String {
    let mut md = format!("# Shades of {}\n\n", batch.base);
    for shade in batch.shades() {
        md.push_str(&format!("* {}% shade: {}\n", shade.percent.value(), shade.color));
    }
    md
}

#[derive(Serialize)]
pub struct JsonHsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

#[derive(Serialize)]
pub struct JsonShade {
    pub percent: u8,
    pub hex: String,
}

/// JSON view of one batch. `files` is filled in once outputs are written.
#[derive(Serialize)]
pub struct JsonReport {
    pub base: String,
    pub hsl: JsonHsl,
    pub shades: Vec<JsonShade>,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl JsonReport {
    pub fn from_batch(batch: &ShadeBatch) -> Self {
        JsonReport {
            base: batch.base.to_string(),
            hsl: JsonHsl {
                hue: batch.base_hsl.hue,
                saturation: batch.base_hsl.saturation,
                lightness: batch.base_hsl.lightness,
            },
            shades: batch
                .shades()
                .map(|s| JsonShade {
                    percent: s.percent.value(),
                    hex: s.color.to_string(),
                })
                .collect(),
            errors: batch.errors().map(|e| e.to_string()).collect(),
            files: Vec::new(),
        }
    }
}
