use clap::Parser;
use std::path::PathBuf;

use logokey::core::params::{DEFAULT_INPUT, DEFAULT_THRESHOLD};

#[derive(Parser, Debug)]
#[command(
    name = "logokey",
    version,
    about = "Make the border-colored background of a logo transparent"
)]
pub struct CliArgs {
    /// Input image; overwritten in place with the transparent PNG
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Overwrite target (defaults to the input path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path of the transparent copy (defaults to <stem>-transparent.png next to the input)
    #[arg(long)]
    pub copy: Option<PathBuf>,

    /// Path of the base64 text file (defaults to <stem>.b64 next to the input)
    #[arg(long)]
    pub base64: Option<PathBuf>,

    /// Color distance below which a pixel becomes transparent
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
