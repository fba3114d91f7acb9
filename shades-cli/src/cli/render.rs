//! Render a shade batch as a row of labelled swatches.
//!
//! The image is built as an SVG string first, then rasterized with resvg
//! into a tiny-skia pixmap and saved through the `image` crate.

use std::path::Path;
use std::sync::Once;

use image::{DynamicImage, RgbaImage};
use serde::Deserialize;
use tiny_skia::Pixmap;

use shades::ShadeBatch;

use super::error::CliError;

const LABEL_FONT_SIZE: u32 = 11;

/// Pixel layout of the swatch image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchLayout {
    /// Width of one shade cell
    pub cell_width: u32,
    /// Height of the colored rectangle at the top of each cell
    pub swatch_height: u32,
    /// Total image height (rectangle + label area)
    pub image_height: u32,
    /// Label offset from the left edge of the cell
    pub label_x: u32,
    /// Top of the label text
    pub label_y: u32,
}

impl Default for SwatchLayout {
    fn default() -> Self {
        Self {
            cell_width: 150,
            swatch_height: 50,
            image_height: 100,
            label_x: 10,
            label_y: 60,
        }
    }
}

/// Partial layout from a recipe file. Missing fields keep the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOverrides {
    #[serde(default)]
    pub cell_width: Option<u32>,
    #[serde(default)]
    pub swatch_height: Option<u32>,
    #[serde(default)]
    pub image_height: Option<u32>,
    #[serde(default)]
    pub label_x: Option<u32>,
    #[serde(default)]
    pub label_y: Option<u32>,
}

impl SwatchLayout {
    /// Apply recipe overrides on top of this layout.
    pub fn with_overrides(self, overrides: &LayoutOverrides) -> Self {
        Self {
            cell_width: overrides.cell_width.unwrap_or(self.cell_width),
            swatch_height: overrides.swatch_height.unwrap_or(self.swatch_height),
            image_height: overrides.image_height.unwrap_or(self.image_height),
            label_x: overrides.label_x.unwrap_or(self.label_x),
            label_y: overrides.label_y.unwrap_or(self.label_y),
        }
    }

    /// Image size for `cells` shades. Never zero-sized.
    ///
    /// Fails when the row, or any label position inside it, does not fit in
    /// `u32` pixels.
    pub fn image_size(&self, cells: usize) -> Result<(u32, u32), CliError> {
        let too_large = || {
            CliError::Render(format!(
                "layout too large for {} swatches (cell_width {}, label_x {}, label_y {})",
                cells, self.cell_width, self.label_x, self.label_y
            ))
        };

        let cells = u32::try_from(cells.max(1)).map_err(|_| too_large())?;
        let width = self.cell_width.max(1).checked_mul(cells).ok_or_else(too_large)?;

        // Rightmost label and the label baseline must be addressable too.
        (cells - 1)
            .checked_mul(self.cell_width)
            .and_then(|x| x.checked_add(self.label_x))
            .ok_or_else(too_large)?;
        self.label_baseline().ok_or_else(too_large)?;

        Ok((width, self.image_height.max(1)))
    }

    /// SVG text is positioned by its baseline; the layout gives the top.
    fn label_baseline(&self) -> Option<u32> {
        self.label_y.checked_add(LABEL_FONT_SIZE)
    }
}

/// Build the SVG document for a batch: one rectangle and label per shade.
pub fn swatch_svg(batch: &ShadeBatch, layout: &SwatchLayout) -> Result<String, CliError> {
    let (width, height) = layout.image_size(batch.shade_count())?;
    let baseline = layout.label_baseline().unwrap_or(u32::MAX);
    let title = format!("Shades of {}", batch.base);

    let mut svg = format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <title>{title}</title>
  <rect width="100%" height="100%" fill="white"/>
"##,
        w = width,
        h = height,
        title = quick_xml::escape::escape(title.as_str()),
    );

    // image_size has checked every offset below against overflow.
    for (i, shade) in batch.shades().enumerate() {
        let x = i as u32 * layout.cell_width;
        let label = shade.color.to_string();

        svg.push_str(&format!(
            r##"  <g id="shade-{percent}">
    <rect x="{x}" y="0" width="{cw}" height="{sh}" fill="{fill}"/>
    <text x="{tx}" y="{ty}" font-family="sans-serif" font-size="{fs}" fill="black">{label}</text>
  </g>
"##,
            percent = shade.percent.value(),
            x = x,
            cw = layout.cell_width,
            sh = layout.swatch_height,
            fill = label,
            tx = x + layout.label_x,
            ty = baseline,
            fs = LABEL_FONT_SIZE,
            label = quick_xml::escape::escape(label.as_str()),
        ));
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

static MISSING_FONTS: Once = Once::new();

/// Labels need at least one font face to be drawn.
fn has_label_fonts(fontdb: &usvg::fontdb::Database) -> bool {
    fontdb.faces().next().is_some()
}

/// Rasterize an SVG document onto a white pixmap of the given size.
pub fn render_pixmap(svg: &str, width: u32, height: u32) -> Result<Pixmap, CliError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    if !has_label_fonts(&options.fontdb) {
        MISSING_FONTS.call_once(|| {
            eprintln!("Warning: No system fonts found; swatch labels will be missing from images");
        });
    }

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| CliError::Render(e.to_string()))?;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| CliError::Render(format!("could not create {}x{} pixmap", width, height)))?;

    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Render the batch straight to an image.
pub fn render_batch(batch: &ShadeBatch, layout: &SwatchLayout) -> Result<DynamicImage, CliError> {
    let (width, height) = layout.image_size(batch.shade_count())?;
    let pixmap = render_pixmap(&swatch_svg(batch, layout)?, width, height)?;

    // Background is opaque, so premultiplied and straight alpha are the same bytes.
    let rgba = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| CliError::Render("pixmap size mismatch".to_string()))?;

    Ok(DynamicImage::ImageRgba8(rgba))
}

/// Render the batch and save it; format follows the file extension.
pub fn save_swatch_image(
    batch: &ShadeBatch,
    layout: &SwatchLayout,
    path: &Path,
) -> Result<(), CliError> {
    let image = render_batch(batch, layout)?;
    image.to_rgb8().save(path).map_err(|e| match e {
        image::ImageError::IoError(io) => CliError::io(path, io),
        other => CliError::Image(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shades::{HexColor, hex_to_shades};

    fn swatch_center_color(image: &DynamicImage, layout: &SwatchLayout, index: usize) -> HexColor {
        let rgb = image.to_rgb8();
        let x = index as u32 * layout.cell_width + layout.cell_width / 2;
        let pixel = rgb.get_pixel(x, layout.swatch_height / 2);
        HexColor::new(pixel[0], pixel[1], pixel[2])
    }

    #[test]
    fn svg_has_one_rect_per_shade() {
        let batch = hex_to_shades("#FF0000", ["20", "bad", "50"]).unwrap();
        let svg = swatch_svg(&batch, &SwatchLayout::default()).unwrap();

        assert!(svg.contains(r#"width="300" height="100""#));
        assert!(svg.contains("<title>Shades of #FF0000</title>"));
        assert!(svg.contains(r##"<rect x="0" y="0" width="150" height="50" fill="#CC0000"/>"##));
        assert!(svg.contains(r##"<rect x="150" y="0" width="150" height="50" fill="#7F0000"/>"##));
        assert!(svg.contains(r#"<text x="160" y="71""#));
        assert_eq!(svg.matches("<g id=\"shade-").count(), 2);
    }

    #[test]
    fn empty_batch_is_still_drawable() {
        let batch = hex_to_shades("#FF0000", Vec::<u8>::new()).unwrap();
        let layout = SwatchLayout::default();
        assert_eq!(layout.image_size(batch.shade_count()).unwrap(), (150, 100));
        assert!(render_batch(&batch, &layout).is_ok());
    }

    #[test]
    fn rendered_swatches_have_shade_colors() {
        let batch = hex_to_shades("#3A86FF", [0, 50, 100]).unwrap();
        let layout = SwatchLayout::default();
        let image = render_batch(&batch, &layout).unwrap();

        assert_eq!((image.width(), image.height()), (450, 100));
        for (i, shade) in batch.shades().enumerate() {
            let rendered = swatch_center_color(&image, &layout, i);
            assert!(
                rendered.max_channel_diff(&shade.color) <= 1,
                "swatch {} rendered as {}, expected {}",
                i,
                rendered,
                shade.color
            );
        }

        // Below the swatches, away from the label, the background stays white.
        let rgb = image.to_rgb8();
        assert_eq!(rgb.get_pixel(140, 95).0, [255, 255, 255]);
    }

    #[test]
    fn overrides_only_touch_given_fields() {
        let overrides = LayoutOverrides {
            cell_width: Some(80),
            image_height: Some(120),
            ..Default::default()
        };
        let layout = SwatchLayout::default().with_overrides(&overrides);
        assert_eq!(layout.cell_width, 80);
        assert_eq!(layout.image_height, 120);
        assert_eq!(layout.swatch_height, 50);
        assert_eq!(layout.label_y, 60);
    }

    #[test]
    fn oversized_layout_is_a_render_error() {
        let layout = SwatchLayout {
            cell_width: 3_000_000_000,
            ..Default::default()
        };
        assert!(matches!(layout.image_size(2), Err(CliError::Render(_))));

        let batch = hex_to_shades("#FF0000", [20, 80]).unwrap();
        assert!(matches!(swatch_svg(&batch, &layout), Err(CliError::Render(_))));
        assert!(matches!(render_batch(&batch, &layout), Err(CliError::Render(_))));
    }

    #[test]
    fn label_offsets_are_checked() {
        let far_label = SwatchLayout {
            label_x: u32::MAX,
            ..Default::default()
        };
        // A single cell puts its label at x = 0 + label_x, which fits.
        assert!(far_label.image_size(1).is_ok());
        assert!(far_label.image_size(2).is_err());

        let low_label = SwatchLayout {
            label_y: u32::MAX - 5,
            ..Default::default()
        };
        assert!(matches!(low_label.image_size(1), Err(CliError::Render(_))));
    }

    #[test]
    fn empty_font_database_has_no_label_fonts() {
        assert!(!has_label_fonts(&usvg::fontdb::Database::new()));
    }

    #[test]
    fn save_reports_missing_directory() {
        let batch = hex_to_shades("#00FF00", [50]).unwrap();
        let path = std::env::temp_dir()
            .join(format!("shades-missing-{}", std::process::id()))
            .join("nested")
            .join("out.png");
        let err = save_swatch_image(&batch, &SwatchLayout::default(), &path).unwrap_err();
        assert!(matches!(err, CliError::Io { .. } | CliError::Image(_)), "{:?}", err);
    }
}
