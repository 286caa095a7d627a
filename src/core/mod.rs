//! Core building blocks: transform parameters and the in-memory processing
//! stages (border sampling, background detection, alpha keying). These are
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
