use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Euclidean RGB distance below which a pixel is treated as background.
pub const DEFAULT_THRESHOLD: f64 = 60.0;

pub const DEFAULT_INPUT: &str = "assets/galstian-logo.png";
pub const DEFAULT_COPY: &str = "assets/galstian-logo-transparent.png";
pub const DEFAULT_BASE64: &str = "assets/galstian-logo.b64";

/// Transform parameters: where to read, where to write, and how close to the
/// background a pixel must be to become transparent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformParams {
    pub input_path: PathBuf,
    /// Usually the input path itself; the input is overwritten in place.
    pub overwrite_path: PathBuf,
    pub copy_path: PathBuf,
    pub base64_path: PathBuf,
    /// Strict upper bound on the distance to the background color
    pub threshold: f64,
}

impl TransformParams {
    /// Parameters for `input` with outputs placed next to it:
    /// `<stem>-transparent.png` for the copy and `<stem>.b64` for the text.
    pub fn for_input(input: impl AsRef<Path>) -> Self {
        let input = input.as_ref();
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "logo".to_string());
        let dir = input.parent().unwrap_or_else(|| Path::new(""));

        Self {
            input_path: input.to_path_buf(),
            overwrite_path: input.to_path_buf(),
            copy_path: dir.join(format!("{}-transparent.png", stem)),
            base64_path: dir.join(format!("{}.b64", stem)),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            overwrite_path: PathBuf::from(DEFAULT_INPUT),
            copy_path: PathBuf::from(DEFAULT_COPY),
            base64_path: PathBuf::from(DEFAULT_BASE64),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_derived_sibling_paths() {
        assert_eq!(TransformParams::for_input(DEFAULT_INPUT), TransformParams::default());
    }

    #[test]
    fn for_input_without_parent() {
        let params = TransformParams::for_input("brand.jpg");
        assert_eq!(params.overwrite_path, PathBuf::from("brand.jpg"));
        assert_eq!(params.copy_path, PathBuf::from("brand-transparent.png"));
        assert_eq!(params.base64_path, PathBuf::from("brand.b64"));
        assert_eq!(params.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(TransformParams::default()).unwrap();
        assert_eq!(json["threshold"], 60.0);
        assert_eq!(json["copy_path"], DEFAULT_COPY);
    }
}
