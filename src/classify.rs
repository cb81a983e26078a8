//! Foreground/background classification of single pixels.
//!
//! A pixel is background when it is both bright and nearly grey. Everything
//! else with enough alpha is treated as part of the glyph.

use image::Rgba;

use crate::settings::StencilConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    Transparent,
    Opaque,
}

/// Integer mean of the three colour channels.
pub fn brightness(pixel: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Spread between the strongest and weakest colour channel.
pub fn saturation(pixel: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    r.max(g).max(b) - r.min(g).min(b)
}

pub fn is_background_white(pixel: &Rgba<u8>, white_brightness: u8, white_saturation: u8) -> bool {
    brightness(pixel) > white_brightness && saturation(pixel) < white_saturation
}

/// Whether `pixel` belongs to the glyph under the given thresholds.
pub fn is_content(
    pixel: &Rgba<u8>,
    white_brightness: u8,
    white_saturation: u8,
    alpha_minimum: u8,
) -> bool {
    pixel[3] >= alpha_minimum && !is_background_white(pixel, white_brightness, white_saturation)
}

pub fn classify_pixel(pixel: &Rgba<u8>, cfg: &StencilConfig) -> Coverage {
    if is_content(
        pixel,
        cfg.white_brightness,
        cfg.white_saturation,
        cfg.alpha_threshold,
    ) {
        Coverage::Opaque
    } else {
        Coverage::Transparent
    }
}
