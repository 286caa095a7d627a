use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Encode `img` as PNG into memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(Error::Encode)?;
    Ok(buf.into_inner())
}

/// Write `bytes` to `output`, replacing any existing file.
pub fn write_bytes(output: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(output, bytes).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {:?}", bytes.len(), output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn encodes_png_signature() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 0]));
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let back = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(back, img);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = write_bytes(&path, b"x").unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
