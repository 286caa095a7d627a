use image::RgbaImage;

use crate::types::Rgb;

/// Collect the RGB triple of every pixel on the four edges.
///
/// Order: top row left-to-right, bottom row left-to-right, left column
/// top-to-bottom, right column top-to-bottom. Corners are sampled twice, and
/// a single-row or single-column image samples the same pixels on both sides.
/// Yields `2 * (w + h)` samples; empty for a 0-sized image.
pub fn sample_border(img: &RgbaImage) -> Vec<Rgb> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let mut samples = Vec::with_capacity(2 * (w as usize + h as usize));
    for y in [0, h - 1] {
        samples.extend((0..w).map(|x| Rgb::from(img.get_pixel(x, y))));
    }
    for x in [0, w - 1] {
        samples.extend((0..h).map(|y| Rgb::from(img.get_pixel(x, y))));
    }
    samples
}
