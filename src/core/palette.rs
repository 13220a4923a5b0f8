use image::Rgb;
use serde::{Deserialize, Serialize};

/**
 * Closed set of palettes that map a normalized escape value on [0,1] to a
 * display color. The set is fixed at compile time; which member is active
 * is a configuration choice.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKind {
    /// All three channels ramp together from black to white.
    Grayscale,
    /// Three equal bands: ramp red, then green, then blue, accumulating.
    Banded,
    /// Brightness quantized into ten discrete levels, hue swept continuously.
    #[default]
    HueStepped,
}

impl PaletteKind {
    /// Map a normalized escape value to a pixel color.
    /// Values outside [0,1] are clamped before the formula is applied.
    pub fn compute_pixel(&self, value: f64) -> Rgb<u8> {
        let value = value.clamp(0.0, 1.0);
        match self {
            PaletteKind::Grayscale => {
                let channel = unit_to_channel(value);
                Rgb([channel, channel, channel])
            }
            PaletteKind::Banded => banded_pixel(value),
            PaletteKind::HueStepped => hue_stepped_pixel(value),
        }
    }
}

/// Convert a color channel on [0,1] to a u8 channel by rounding.
fn unit_to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

// Band boundaries sit at exactly 1/3 and 2/3; within each band the active
// channel ramps as `3 * value - band_index`, so the red channel is
// continuous across the first seam and green across the second.
fn banded_pixel(value: f64) -> Rgb<u8> {
    let (red, green, blue) = if value < 1.0 / 3.0 {
        (3.0 * value, 0.0, 0.0)
    } else if value < 2.0 / 3.0 {
        (1.0, 3.0 * value - 1.0, 0.0)
    } else {
        (1.0, 1.0, 3.0 * value - 2.0)
    };
    Rgb([
        unit_to_channel(red),
        unit_to_channel(green),
        unit_to_channel(blue),
    ])
}

// The hue multiplier is 10, so the hue wraps through ten full cycles across
// the unit interval, one per brightness level. The repeating color bands are
// the visual signature of this palette.
fn hue_stepped_pixel(value: f64) -> Rgb<u8> {
    let brightness = 1.0 - (value * 10.0).floor() / 10.0;
    hsb_to_rgb(360.0 * value * 10.0, 1.0, brightness)
}

/// Standard HSB to RGB conversion. Hue is in degrees and is reduced mod 360;
/// saturation and brightness are on [0,1].
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Rgb<u8> {
    let hue_sector = hue.rem_euclid(360.0) / 60.0;
    let sector = hue_sector.floor();
    let fraction = hue_sector - sector;

    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * fraction);
    let t = brightness * (1.0 - saturation * (1.0 - fraction));

    let (red, green, blue) = match sector as u8 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    Rgb([
        unit_to_channel(red),
        unit_to_channel(green),
        unit_to_channel(blue),
    ])
}
