use image::{imageops, RgbaImage};

use crate::classify::is_content;

/// Inclusive pixel rectangle around all content pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})..=({}, {}) [{}x{}]",
            self.min_x,
            self.min_y,
            self.max_x,
            self.max_y,
            self.width(),
            self.height()
        )
    }
}

/// Smallest box containing every content pixel, or `None` if there are none.
pub fn detect_content_bounds(
    img: &RgbaImage,
    white_brightness: u8,
    white_saturation: u8,
    alpha_minimum: u8,
) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if !is_content(pixel, white_brightness, white_saturation, alpha_minimum) {
            continue;
        }
        match bounds.as_mut() {
            Some(b) => b.include(x, y),
            None => {
                bounds = Some(BoundingBox {
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                })
            }
        }
    }

    bounds
}

pub fn crop_to(img: &RgbaImage, bounds: &BoundingBox) -> RgbaImage {
    imageops::crop_imm(
        img,
        bounds.min_x,
        bounds.min_y,
        bounds.width(),
        bounds.height(),
    )
    .to_image()
}
