//! The stencil pipeline: crop, resize, mask, binarize.
//!
//! Stages run in a fixed order. Cropping looks at source pixels, while
//! classification only ever sees the resized buffer, since resampling
//! changes brightness and saturation along the edges of the glyph. The
//! circular mask works on position alone and wins over any colour.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, Rgba32FImage, RgbaImage};
use tracing::debug;

use crate::alpha_bleed::alpha_bleed;
use crate::bounds::{crop_to, detect_content_bounds, BoundingBox};
use crate::classify::{classify_pixel, Coverage};
use crate::error::{StencilError, StencilResult};
use crate::mask::apply_circular_mask;
use crate::settings::{EdgeMode, StencilConfig};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const OPAQUE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Decodes `source`, runs the pipeline and returns PNG bytes.
pub fn generate(source: &[u8], cfg: &StencilConfig) -> StencilResult<Vec<u8>> {
    let img = image::load_from_memory(source)
        .map_err(StencilError::Decode)?
        .to_rgba8();

    let stencil = render(img, cfg)?;
    encode_png(&stencil)
}

/// Runs the pipeline on an already decoded image.
#[tracing::instrument(skip_all, fields(width = img.width(), height = img.height()))]
pub fn render(mut img: RgbaImage, cfg: &StencilConfig) -> StencilResult<RgbaImage> {
    cfg.validate()?;

    if cfg.crop_to_content {
        let bounds = detect_content_bounds(
            &img,
            cfg.white_brightness,
            cfg.white_saturation,
            cfg.alpha_threshold,
        )
        .ok_or(StencilError::EmptyContent)?;
        debug!(%bounds, "cropping to content");
        img = crop_to(&img, &bounds);
    }

    if cfg.bleed {
        alpha_bleed(&mut img);
    }

    let (w, h) = (cfg.size.width, cfg.size.height);
    if img.dimensions() != (w, h) {
        debug!(from = ?img.dimensions(), to = %cfg.size, filter = ?cfg.filter, "resizing");
        img = resize_premultiplied(&img, w, h, cfg.filter.into());
    }

    if cfg.circular_mask {
        apply_circular_mask(&mut img, cfg.mask_margin);
    }

    binarize(&mut img, cfg);
    Ok(img)
}

/// Resamples with colour weighted by alpha, so transparent pixels add no
/// colour of their own to the edges they blend into.
pub fn resize_premultiplied(img: &RgbaImage, w: u32, h: u32, filter: FilterType) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let a = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * a,
            g as f32 / 255.0 * a,
            b as f32 / 255.0 * a,
            a,
        ])
    });

    let resized = imageops::resize(&premultiplied, w, h, filter);

    RgbaImage::from_fn(w, h, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let a = a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        let straight = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([
            straight(r),
            straight(g),
            straight(b),
            (a * 255.0).round() as u8,
        ])
    })
}

/// Rewrites every pixel to [`TRANSPARENT`] or black.
///
/// With [`EdgeMode::Hard`] black is always [`OPAQUE_BLACK`]; with
/// [`EdgeMode::Soft`] it keeps the pixel's resampled alpha.
pub fn binarize(img: &mut RgbaImage, cfg: &StencilConfig) {
    let mut opaque = 0usize;

    for pixel in img.pixels_mut() {
        let coverage = if pixel[3] == 0 {
            Coverage::Transparent
        } else {
            classify_pixel(pixel, cfg)
        };

        *pixel = match (coverage, cfg.edges) {
            (Coverage::Transparent, _) => TRANSPARENT,
            (Coverage::Opaque, EdgeMode::Hard) => OPAQUE_BLACK,
            (Coverage::Opaque, EdgeMode::Soft) => Rgba([0, 0, 0, pixel[3]]),
        };

        if coverage == Coverage::Opaque {
            opaque += 1;
        }
    }

    debug!(opaque, total = img.width() * img.height(), "binarized");
}

pub fn encode_png(img: &RgbaImage) -> StencilResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(StencilError::Encode)?;
    Ok(buf)
}

/// What the pipeline would see in a source image, before any resizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub width: u32,
    pub height: u32,
    pub bounds: Option<BoundingBox>,
    pub opaque: usize,
    pub transparent: usize,
}

pub fn inspect(img: &RgbaImage, cfg: &StencilConfig) -> Inspection {
    let bounds = detect_content_bounds(
        img,
        cfg.white_brightness,
        cfg.white_saturation,
        cfg.alpha_threshold,
    );
    let opaque = img
        .pixels()
        .filter(|p| classify_pixel(p, cfg) == Coverage::Opaque)
        .count();
    let total = img.width() as usize * img.height() as usize;

    Inspection {
        width: img.width(),
        height: img.height(),
        bounds,
        opaque,
        transparent: total - opaque,
    }
}
