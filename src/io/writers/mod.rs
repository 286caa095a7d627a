pub mod base64_text;
pub mod png;
pub mod report;
