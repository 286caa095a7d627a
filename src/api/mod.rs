//! High-level, ergonomic library API: key out a logo's background from file
//! to files, or from an in-memory image to an in-memory buffer. Prefer these
//! entrypoints over the low-level processing modules when integrating logokey.
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use image::DynamicImage;
use serde::Serialize;
use tracing::info;

use crate::core::params::TransformParams;
use crate::core::processing::pipeline::{KeyedImage, key_out_background};
use crate::error::Result;
use crate::io::reader::load_rgba;
use crate::io::writers::base64_text::write_base64_copy;
use crate::io::writers::png::{encode_png, write_bytes};
use crate::types::Rgb;

/// Summary of one file-to-files run
#[derive(Debug, Clone, Serialize)]
pub struct TransformReport {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub threshold: f64,
    pub cleared_pixels: usize,
    pub overwrite_path: PathBuf,
    pub copy_path: PathBuf,
    pub base64_path: PathBuf,
    /// Length of the base64 text in characters
    pub base64_len: usize,
    pub processed_at: DateTime<Utc>,
}

/// Key out the background of an in-memory image (no disk I/O)
pub fn process_image_to_buffer(image: &DynamicImage, threshold: f64) -> Result<KeyedImage> {
    key_out_background(&image.to_rgba8(), threshold)
}

/// Key out the background of `params.input_path` and write all outputs.
///
/// The PNG result overwrites `overwrite_path` and an identical copy goes to
/// `copy_path`; the overwritten file is then re-read and its base64 text
/// written to `base64_path`. The first failure aborts the run, leaving any
/// outputs already written in place.
pub fn process_logo_to_paths(params: &TransformParams) -> Result<TransformReport> {
    let input = load_rgba(&params.input_path)?;
    let keyed = key_out_background(&input, params.threshold)?;

    let png = encode_png(&keyed.image)?;
    write_bytes(&params.overwrite_path, &png)?;
    write_bytes(&params.copy_path, &png)?;
    let base64_len = write_base64_copy(&params.overwrite_path, &params.base64_path)?;

    info!(
        "Successfully processed: {:?} -> {:?}, {:?}, {:?}",
        params.input_path, params.overwrite_path, params.copy_path, params.base64_path
    );

    Ok(TransformReport {
        width: keyed.image.width(),
        height: keyed.image.height(),
        background: keyed.background,
        threshold: params.threshold,
        cleared_pixels: keyed.cleared_pixels,
        overwrite_path: params.overwrite_path.clone(),
        copy_path: params.copy_path.clone(),
        base64_path: params.base64_path.clone(),
        base64_len,
        processed_at: Utc::now(),
    })
}
