use bit_vec::BitVec;
use image::RgbaImage;

/// One bit per pixel, row-major.
pub(crate) struct PixelMask {
    size: (u32, u32),
    data: BitVec,
}

impl PixelMask {
    pub(crate) fn new(w: u32, h: u32) -> Self {
        Self {
            size: (w, h),
            data: BitVec::from_elem((w as usize) * (h as usize), false),
        }
    }

    pub(crate) fn get(&self, x: u32, y: u32) -> bool {
        self.data.get(self.index(x, y)).unwrap_or(false)
    }

    pub(crate) fn set(&mut self, x: u32, y: u32) {
        let index = self.index(x, y);
        self.data.set(index, true);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.size.0 as usize
    }
}

/// Pixels lying inside the circle inscribed in a `w` x `h` canvas.
///
/// The circle is centred at `((w-1)/2, (h-1)/2)` with radius
/// `min(w, h)/2 - margin`. A pixel is outside when its distance from the
/// centre is strictly greater than the radius.
pub(crate) fn circle_mask(w: u32, h: u32, margin: u32) -> PixelMask {
    let mut inside = PixelMask::new(w, h);
    let cx = (w as f64 - 1.0) / 2.0;
    let cy = (h as f64 - 1.0) / 2.0;
    let radius = w.min(h) as f64 / 2.0 - margin as f64;

    if radius < 0.0 {
        return inside;
    }

    for y in 0..h {
        for x in 0..w {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if (dx * dx + dy * dy).sqrt() <= radius {
                inside.set(x, y);
            }
        }
    }

    inside
}

/// Zeroes the alpha of every pixel outside the inscribed circle, whatever its colour.
pub fn apply_circular_mask(img: &mut RgbaImage, margin: u32) {
    let (w, h) = img.dimensions();
    let inside = circle_mask(w, h, margin);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if !inside.get(x, y) {
            pixel[3] = 0;
        }
    }
}
