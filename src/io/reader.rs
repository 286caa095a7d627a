use std::fs;
use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Decode the image at `path` into an RGBA grid.
///
/// The format is detected from the file contents, not its extension. Formats
/// without an alpha channel decode as fully opaque.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {:?}", bytes.len(), path);

    let decoded = image::load_from_memory(&bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Decoded {:?}: {}x{} ({:?})",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(decoded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");
        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, b"definitely not a png").unwrap();
        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn rgb_input_gets_opaque_alpha() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.bmp");
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&path).unwrap();

        let img = load_rgba(&path).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert!(img.pixels().all(|p| p.0 == [1, 2, 3, 255]));
    }
}
