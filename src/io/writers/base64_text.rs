use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use tracing::info;

use crate::error::{Error, Result};
use crate::io::writers::png::write_bytes;

/// Read `source` back from disk and write its standard base64 encoding to
/// `dest` as ASCII text without a trailing newline.
///
/// Returns the length of the encoded text.
pub fn write_base64_copy(source: &Path, dest: &Path) -> Result<usize> {
    let bytes = fs::read(source).map_err(|source_err| Error::Read {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let encoded = general_purpose::STANDARD.encode(&bytes);
    write_bytes(dest, encoded.as_bytes())?;
    info!("Base64 copy of {:?}: {} chars", source, encoded.len());
    Ok(encoded.len())
}
