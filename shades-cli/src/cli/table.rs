//! Console table of generated shades.
//!
//! Colors are applied with crossterm styling. The `Color` column shows a
//! block painted in the shade itself, so the table doubles as a preview.

use crossterm::style::{Color, Stylize};
use shades::{HexColor, Shade, ShadeBatch};

const SWATCH: &str = "      ";
const HEADERS: [&str; 3] = ["Value", "Hex Code", "Color"];

fn term_color(color: HexColor) -> Color {
    Color::Rgb {
        r: color.red(),
        g: color.green(),
        b: color.blue(),
    }
}

fn color_cell(shade: &Shade, use_color: bool) -> (String, usize) {
    let hex = shade.color.to_string();
    let width = SWATCH.len() + 1 + hex.len();
    if use_color {
        let cell = format!("{} {}", SWATCH.on(term_color(shade.color)), hex.clone().bold());
        (cell, width)
    } else {
        (format!("{} {}", SWATCH, hex), width)
    }
}

/// Format the table for `batch`. With `use_color` off the output is plain text.
pub fn format_table(batch: &ShadeBatch, use_color: bool) -> String {
    let rows: Vec<(String, String, (String, usize))> = batch
        .shades()
        .map(|s| (s.percent.to_string(), s.color.to_string(), color_cell(s, use_color)))
        .collect();

    let value_w = rows.iter().map(|r| r.0.len()).chain([HEADERS[0].len()]).max().unwrap_or(0);
    let hex_w = rows.iter().map(|r| r.1.len()).chain([HEADERS[1].len()]).max().unwrap_or(0);
    let color_w = rows.iter().map(|r| r.2.1).chain([HEADERS[2].len()]).max().unwrap_or(0);

    let title = format!("Shades of {}", batch.base);
    let rule = format!(
        "+{}+{}+{}+",
        "-".repeat(value_w + 2),
        "-".repeat(hex_w + 2),
        "-".repeat(color_w + 2)
    );

    let mut out = String::new();
    if use_color {
        out.push_str(&format!("{}\n", title.green().bold()));
    } else {
        out.push_str(&format!("{}\n", title));
    }
    out.push_str(&rule);
    out.push('\n');

    let header = format!(
        "| {:<vw$} | {:<hw$} | {:<cw$} |",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        vw = value_w,
        hw = hex_w,
        cw = color_w
    );
    if use_color {
        out.push_str(&format!("{}\n", header.magenta()));
    } else {
        out.push_str(&header);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');

    for (value, hex, (cell, cell_w)) in &rows {
        let value = format!("{:<vw$}", value, vw = value_w);
        let value = if use_color {
            value.cyan().to_string()
        } else {
            value
        };
        // Styled cells contain escape codes, so pad by visible width.
        let pad = " ".repeat(color_w - cell_w);
        out.push_str(&format!(
            "| {} | {:<hw$} | {}{} |\n",
            value,
            hex,
            cell,
            pad,
            hw = hex_w
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Print the table to stdout.
pub fn print_table(batch: &ShadeBatch, use_color: bool) {
    print!("{}", format_table(batch, use_color));
}
