//! Conversions between hex, RGB and HSL.

use crate::color::{HexColor, Hsl, Rgb};
use crate::error::ShadeError;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Parse a hex color string into normalized RGB.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ShadeError> {
    Ok(hex.parse::<HexColor>()?.to_rgb())
}

/// Convert normalized RGB to HSL.
///
/// Saturation uses separate formulas below and above half lightness. They are
/// algebraically the same as the unified `c / (1 - |2l - 1|)` but the split
/// form keeps float results identical to existing shade tables.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let Rgb { r, g, b } = rgb;
    let cmax = rgb.max();
    let cmin = rgb.min();
    let lightness = (cmax + cmin) / 2.0;

    if cmax == cmin {
        return Hsl::new(0.0, 0.0, lightness);
    }

    let chroma = cmax - cmin;
    let saturation = if lightness < 0.5 {
        chroma / (cmax + cmin)
    } else {
        chroma / (2.0 - cmax - cmin)
    };

    let sector = if cmax == r {
        (g - b) / chroma
    } else if cmax == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };

    let mut hue = sector * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    Hsl::new(hue, saturation, lightness)
}

/// Convert HSL back to normalized RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl {
        hue,
        saturation: s,
        lightness: l,
    } = hsl;

    if s == 0.0 {
        return Rgb::new(l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    let h = hue / 360.0;

    Rgb::new(
        hue_channel(m1, m2, h + ONE_THIRD),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - ONE_THIRD),
    )
}

/// One channel of the HSL -> RGB ramp. `h` is a hue fraction, wrapped into [0, 1).
fn hue_channel(m1: f64, m2: f64, h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h < ONE_SIXTH {
        m1 + (m2 - m1) * h * 6.0
    } else if h < 0.5 {
        m2
    } else if h < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - h) * 6.0
    } else {
        m1
    }
}

/// Convert HSL to an 8-bit hex color.
///
/// Channels are truncated, not rounded. A round trip through HSL can land one
/// step below the input channel.
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    let rgb = hsl_to_rgb(hsl);
    // `as u8` truncates toward zero and saturates at 0 and 255.
    HexColor::new(
        (rgb.r * 255.0) as u8,
        (rgb.g * 255.0) as u8,
        (rgb.b * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn hsl_of(hex: &str) -> Hsl {
        rgb_to_hsl(hex_to_rgb(hex).unwrap())
    }

    #[test]
    fn hex_to_rgb_normalizes_channels() {
        let rgb = hex_to_rgb("#FF8000").unwrap();
        assert_abs_diff_eq!(rgb.r, 1.0);
        assert_abs_diff_eq!(rgb.g, 128.0 / 255.0);
        assert_abs_diff_eq!(rgb.b, 0.0);
    }

    #[test]
    fn hex_to_rgb_rejects_malformed() {
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#GGGGGG").is_err());
        assert!(hex_to_rgb("123456").is_ok());
    }

    #[test]
    fn primaries_to_hsl() {
        let red = hsl_of("#FF0000");
        assert_abs_diff_eq!(red.hue, 0.0);
        assert_abs_diff_eq!(red.saturation, 1.0);
        assert_abs_diff_eq!(red.lightness, 0.5);

        let green = hsl_of("#00FF00");
        assert_abs_diff_eq!(green.hue, 120.0, epsilon = 1e-9);

        let blue = hsl_of("#0000FF");
        assert_abs_diff_eq!(blue.hue, 240.0, epsilon = 1e-9);
    }

    #[test]
    fn negative_hue_wraps() {
        // Magenta-ish red: red is max and blue > green, so the raw sector is negative.
        let hsl = hsl_of("#FF0080");
        assert!(hsl.hue > 300.0 && hsl.hue < 360.0, "hue was {}", hsl.hue);
    }

    #[test]
    fn achromatic_has_no_hue_or_saturation() {
        let grey = hsl_of("#808080");
        assert_eq!(grey.hue, 0.0);
        assert_eq!(grey.saturation, 0.0);
        assert_abs_diff_eq!(grey.lightness, 128.0 / 255.0);
    }

    #[test]
    fn saturation_branches() {
        // Dark color: l < 0.5 branch.
        let dark = hsl_of("#400000");
        assert_abs_diff_eq!(dark.saturation, 1.0, epsilon = 1e-9);
        // Light color: l >= 0.5 branch.
        let light = hsl_of("#FF8080");
        assert_abs_diff_eq!(light.saturation, 1.0, epsilon = 1e-9);
        let pastel = hsl_of("#C0A0A0");
        assert!(pastel.saturation > 0.0 && pastel.saturation < 1.0);
    }

    #[test]
    fn hsl_to_hex_truncates() {
        // 0.25 lightness red -> 0.5 * 255 = 127.5 -> 127.
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 1.0, 0.25)).to_string(), "#7F0000");
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 1.0)), HexColor::WHITE);
        assert_eq!(hsl_to_hex(Hsl::new(200.0, 0.7, 0.0)), HexColor::BLACK);
    }

    #[test]
    fn round_trip_within_one_step() {
        // Coarse grid over the whole cube, including both ends of every channel.
        let steps = [0u8, 1, 17, 64, 127, 128, 200, 254, 255];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let original = HexColor::new(r, g, b);
                    let back = hsl_to_hex(rgb_to_hsl(original.to_rgb()));
                    assert!(
                        original.max_channel_diff(&back) <= 1,
                        "{} came back as {}",
                        original,
                        back
                    );
                }
            }
        }
    }
}
