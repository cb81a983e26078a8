use image::{Rgba, RgbaImage};
use traystencil::bounds::{crop_to, detect_content_bounds, BoundingBox};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn detect(img: &RgbaImage) -> Option<BoundingBox> {
    detect_content_bounds(img, 220, 30, 128)
}

#[test]
fn all_white_has_no_content() {
    let img = RgbaImage::from_pixel(10, 10, WHITE);
    assert_eq!(detect(&img), None);
}

#[test]
fn fully_transparent_has_no_content() {
    let img = RgbaImage::from_pixel(10, 10, Rgba([200, 0, 0, 0]));
    assert_eq!(detect(&img), None);
}

#[test]
fn single_pixel_box() {
    let mut img = RgbaImage::from_pixel(10, 10, WHITE);
    img.put_pixel(3, 4, Rgba([200, 60, 20, 255]));
    assert_eq!(
        detect(&img),
        Some(BoundingBox {
            min_x: 3,
            min_y: 4,
            max_x: 3,
            max_y: 4
        })
    );
}

#[test]
fn box_spans_scattered_pixels() {
    let mut img = RgbaImage::from_pixel(12, 9, WHITE);
    img.put_pixel(7, 1, Rgba([0, 0, 0, 255]));
    img.put_pixel(2, 6, Rgba([10, 80, 200, 255]));
    img.put_pixel(10, 8, Rgba([60, 60, 60, 200]));
    let bounds = detect(&img).unwrap();
    assert_eq!(
        bounds,
        BoundingBox {
            min_x: 2,
            min_y: 1,
            max_x: 10,
            max_y: 8
        }
    );
    assert_eq!(bounds.width(), 9);
    assert_eq!(bounds.height(), 8);
}

#[test]
fn crop_keeps_pixels_and_channels() {
    let mut img = RgbaImage::from_pixel(10, 10, WHITE);
    img.put_pixel(3, 4, Rgba([1, 2, 3, 200]));
    img.put_pixel(5, 6, Rgba([4, 5, 6, 255]));
    let bounds = detect(&img).unwrap();
    let cropped = crop_to(&img, &bounds);

    assert_eq!(cropped.dimensions(), (3, 3));
    assert_eq!(*cropped.get_pixel(0, 0), Rgba([1, 2, 3, 200]));
    assert_eq!(*cropped.get_pixel(2, 2), Rgba([4, 5, 6, 255]));
    assert_eq!(*cropped.get_pixel(1, 1), WHITE);
}

#[test]
fn cropped_image_cannot_be_cropped_further() {
    let mut img = RgbaImage::from_pixel(16, 16, WHITE);
    for (x, y) in [(4, 5), (11, 7), (8, 13)] {
        img.put_pixel(x, y, Rgba([30, 30, 30, 255]));
    }
    let cropped = crop_to(&img, &detect(&img).unwrap());
    let again = detect(&cropped).unwrap();
    assert_eq!(
        again,
        BoundingBox {
            min_x: 0,
            min_y: 0,
            max_x: cropped.width() - 1,
            max_y: cropped.height() - 1
        }
    );
}
