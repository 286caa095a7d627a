use tracing::{info, warn};

use logokey::io::writers::report::write_report;
use logokey::{TransformParams, process_logo_to_paths};

use super::args::CliArgs;

/// Build transform parameters from the arguments; unset outputs are derived
/// from the input path.
pub fn params_from_args(args: &CliArgs) -> TransformParams {
    let mut params = TransformParams::for_input(&args.input);
    if let Some(output) = &args.output {
        params.overwrite_path = output.clone();
    }
    if let Some(copy) = &args.copy {
        params.copy_path = copy.clone();
    }
    if let Some(base64) = &args.base64 {
        params.base64_path = base64.clone();
    }
    params.threshold = args.threshold;
    params
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let params = params_from_args(&args);
    info!("Processing: {:?} (threshold {})", params.input_path, params.threshold);

    let report = process_logo_to_paths(&params).inspect_err(|e| {
        warn!("Failed during {} stage: {}", e.stage(), e);
    })?;

    if let Some(path) = &args.report {
        write_report(path, &report)?;
    }

    println!(
        "TRANSPARENT_DONE {} {}",
        report.overwrite_path.display(),
        report.copy_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_reproduce_fixed_script() {
        let args = CliArgs::try_parse_from(["logokey"]).unwrap();
        assert_eq!(params_from_args(&args), TransformParams::default());
    }

    #[test]
    fn explicit_outputs_win_over_derived_ones() {
        let args = CliArgs::try_parse_from([
            "logokey", "-i", "in/logo.png", "-o", "out/logo.png", "--base64", "out/logo.txt",
        ])
        .unwrap();
        let params = params_from_args(&args);
        assert_eq!(params.input_path, PathBuf::from("in/logo.png"));
        assert_eq!(params.overwrite_path, PathBuf::from("out/logo.png"));
        assert_eq!(params.copy_path, PathBuf::from("in/logo-transparent.png"));
        assert_eq!(params.base64_path, PathBuf::from("out/logo.txt"));
    }
}
