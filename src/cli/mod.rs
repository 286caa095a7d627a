//! Command Line Interface (CLI) layer for logokey.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) that turns the arguments into `TransformParams`, runs the
//! transform and prints the status line.
//!
//! If you are embedding logokey into another application, prefer using the
//! high-level `logokey::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
