//! I/O layer: decoding the input logo (`reader`) and the `writers` for the
//! PNG outputs, the base64 text copy and the optional JSON run report.
pub mod reader;
pub use reader::load_rgba;

pub mod writers;
