use std::path::Path;

use tracing::info;

use crate::api::TransformReport;
use crate::error::Result;
use crate::io::writers::png::write_bytes;

/// Write the run report as a pretty-printed JSON sidecar.
pub fn write_report(output: &Path, report: &TransformReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    write_bytes(output, json.as_bytes())?;
    info!("Report written to {:?}", output);
    Ok(())
}
