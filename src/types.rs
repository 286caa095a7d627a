//! Shared types used across logokey.
//! Includes the `Rgb` color triple and the pipeline `Stage` enum.
use image::Rgba;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple; alpha is never part of color comparisons.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }
}

impl From<Rgba<u8>> for Rgb {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        Rgb([r, g, b])
    }
}

impl From<&Rgba<u8>> for Rgb {
    fn from(pixel: &Rgba<u8>) -> Self {
        Rgb::from(*pixel)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Stage {
    Decode,
    Sample,
    Classify,
    Encode,
    Write,
    Report,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Decode => "decode",
            Stage::Sample => "sample",
            Stage::Classify => "classify",
            Stage::Encode => "encode",
            Stage::Write => "write",
            Stage::Report => "report",
        };
        write!(f, "{}", s)
    }
}
