use image::RgbaImage;
use tracing::{debug, info};

use crate::core::processing::background::dominant_color;
use crate::core::processing::border::sample_border;
use crate::core::processing::keying::apply_transparency;
use crate::error::{Error, Result};
use crate::types::Rgb;

/// Result of keying out an image's background.
#[derive(Debug, Clone)]
pub struct KeyedImage {
    pub image: RgbaImage,
    pub background: Rgb,
    pub cleared_pixels: usize,
}

/// Detect the background color from the border and make every pixel close
/// to it transparent.
pub fn key_out_background(img: &RgbaImage, threshold: f64) -> Result<KeyedImage> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(Error::EmptyImage {
            width: w,
            height: h,
        });
    }
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(Error::InvalidArgument {
            arg: "threshold",
            value: threshold.to_string(),
        });
    }

    let samples = sample_border(img);
    let background = dominant_color(&samples).ok_or(Error::EmptyImage {
        width: w,
        height: h,
    })?;
    debug!("Sampled {} border pixels", samples.len());
    info!("Background color: {} ({:?})", background, background.0);

    let (image, cleared_pixels) = apply_transparency(img, background, threshold);
    info!(
        "Cleared {} of {} pixels (threshold {})",
        cleared_pixels,
        w as usize * h as usize,
        threshold
    );

    Ok(KeyedImage {
        image,
        background,
        cleared_pixels,
    })
}
