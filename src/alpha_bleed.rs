//! Changes pixels in an image that are totally transparent to the color of
//! their nearest non-transparent neighbor, so that resampling does not drag
//! transparent black into the edges of the glyph.
//!
//! Adapted from Asphalt (https://github.com/jackTabsCode/asphalt).

use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

use crate::mask::PixelMask;

const NEIGHBORS: [(i64, i64); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

fn neighbors(w: u32, h: u32, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> {
    NEIGHBORS.iter().filter_map(move |(dx, dy)| {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
            return None;
        }
        Some((nx as u32, ny as u32))
    })
}

/// Fills transparent pixels layer by layer, outward from the opaque ones.
/// Alpha is left at 0; only the colour channels change.
pub fn alpha_bleed(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();

    let mut sampled = PixelMask::new(w, h);
    let mut queued = PixelMask::new(w, h);
    let mut frontier = VecDeque::new();

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] != 0 {
            sampled.set(x, y);
            queued.set(x, y);
        }
    }

    for y in 0..h {
        for x in 0..w {
            if queued.get(x, y) {
                continue;
            }
            if neighbors(w, h, x, y).any(|(nx, ny)| sampled.get(nx, ny)) {
                queued.set(x, y);
                frontier.push_back((x, y));
            }
        }
    }

    while !frontier.is_empty() {
        let mut layer = Vec::with_capacity(frontier.len());

        for _ in 0..frontier.len() {
            let Some((x, y)) = frontier.pop_front() else {
                break;
            };

            let mut sum = [0u32; 3];
            let mut count = 0u32;

            for (nx, ny) in neighbors(w, h, x, y) {
                if sampled.get(nx, ny) {
                    let source = img.get_pixel(nx, ny);
                    for (acc, channel) in sum.iter_mut().zip(source.0) {
                        *acc += channel as u32;
                    }
                    count += 1;
                } else if !queued.get(nx, ny) {
                    queued.set(nx, ny);
                    frontier.push_back((nx, ny));
                }
            }

            let count = count.max(1);
            layer.push((
                x,
                y,
                Rgba([
                    (sum[0] / count) as u8,
                    (sum[1] / count) as u8,
                    (sum[2] / count) as u8,
                    0,
                ]),
            ));
        }

        // Colours of one layer only become visible to the next layer.
        for (x, y, pixel) in layer {
            img.put_pixel(x, y, pixel);
            sampled.set(x, y);
        }
    }
}
