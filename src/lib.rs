#![doc = r#"
logokey — make a logo's background transparent.

The background color is inferred from the image border: every pixel on the
four edges is sampled and the most frequent RGB triple wins (ties go to the
color seen first). Every pixel whose Euclidean RGB distance to that color is
strictly below a threshold (60 by default) gets alpha 0; RGB channels are
never changed. The result is written as PNG over the original file and to a
copy, and the written file's bytes are also stored as base64 text.

Quick start: process a logo in place
------------------------------------
```rust,no_run
use logokey::{process_logo_to_paths, TransformParams};

fn main() -> logokey::Result<()> {
    let params = TransformParams::for_input("assets/logo.png");
    let report = process_logo_to_paths(&params)?;
    println!("background {} cleared {}", report.background, report.cleared_pixels);
    Ok(())
}
```

In-memory processing
--------------------
```rust
use image::{DynamicImage, Rgba, RgbaImage};
use logokey::process_image_to_buffer;

fn main() -> logokey::Result<()> {
    let img = RgbaImage::from_fn(4, 4, |x, y| {
        if x == 0 || y == 0 || x == 3 || y == 3 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([10, 10, 10, 255])
        }
    });
    let keyed = process_image_to_buffer(&DynamicImage::ImageRgba8(img), 60.0)?;
    assert_eq!(keyed.cleared_pixels, 12);
    Ok(())
}
```

Error handling
--------------
All public functions return `logokey::Result<T>`; `Error::stage()` tells which
stage (decode, sample, classify, encode, write, report) failed.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — parameters and the in-memory processing stages.
- [`io`] — image decoding and the PNG / base64 / report writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::{DEFAULT_THRESHOLD, TransformParams};
pub use core::processing::pipeline::{KeyedImage, key_out_background};
pub use error::{Error, Result};
pub use types::{Rgb, Stage};

pub use io::writers::report::write_report;

pub use api::{TransformReport, process_image_to_buffer, process_logo_to_paths};
