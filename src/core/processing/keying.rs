use image::{Rgba, RgbaImage};

use crate::types::Rgb;

/// Euclidean distance between two colors in RGB space.
pub fn color_distance(a: Rgb, b: Rgb) -> f64 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Copy `img`, clearing the alpha of every pixel strictly closer than
/// `threshold` to `background`. RGB channels are never modified.
///
/// Returns the keyed image and the number of pixels made transparent.
pub fn apply_transparency(img: &RgbaImage, background: Rgb, threshold: f64) -> (RgbaImage, usize) {
    let (w, h) = img.dimensions();
    let mut out = RgbaImage::new(w, h);
    let mut cleared = 0usize;

    for y in 0..h {
        for x in 0..w {
            let px = *img.get_pixel(x, y);
            let [r, g, b, a] = px.0;
            let alpha = if color_distance(Rgb::from(px), background) < threshold {
                cleared += 1;
                0
            } else {
                a
            };
            out.put_pixel(x, y, Rgba([r, g, b, alpha]));
        }
    }

    (out, cleared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(color_distance(Rgb::new(0, 0, 0), Rgb::new(36, 48, 0)), 60.0);
        assert_eq!(color_distance(Rgb::new(5, 5, 5), Rgb::new(5, 5, 5)), 0.0);
        let far = color_distance(Rgb::new(255, 255, 255), Rgb::new(10, 10, 10));
        assert!((far - 424.352).abs() < 1e-3);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Rgb::new(200, 13, 77);
        let b = Rgb::new(3, 250, 90);
        assert_eq!(color_distance(a, b), color_distance(b, a));
    }

    #[test]
    fn boundary_is_exclusive() {
        let img = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => Rgba([0, 0, 0, 255]),
            1 => Rgba([36, 48, 0, 255]), // exactly 60 away
            _ => Rgba([35, 48, 0, 255]), // just under 60
        });
        let (out, cleared) = apply_transparency(&img, Rgb::new(0, 0, 0), 60.0);
        assert_eq!(cleared, 2);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(out.get_pixel(1, 0).0, [36, 48, 0, 255]);
        assert_eq!(out.get_pixel(2, 0).0, [35, 48, 0, 0]);
    }

    #[test]
    fn keeps_existing_alpha_of_foreground() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 200, 128])
            }
        });
        let (out, cleared) = apply_transparency(&img, Rgb::new(255, 255, 255), 60.0);
        assert_eq!(cleared, 1);
        assert_eq!(out.get_pixel(1, 0).0, [0, 0, 200, 128]);
    }

    #[test]
    fn zero_threshold_clears_nothing() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([7, 7, 7, 255]));
        let (out, cleared) = apply_transparency(&img, Rgb::new(7, 7, 7), 0.0);
        assert_eq!(cleared, 0);
        assert_eq!(out, img);
    }
}
