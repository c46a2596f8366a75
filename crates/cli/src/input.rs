use anyhow::{Context as AnyhowContext, Result};
use repolens_protocol::RawAnalysisPayload;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a file, or stdin when the path is absent or `-`.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Decode a payload; any JSON object is accepted.
pub fn read_payload(path: Option<&Path>) -> Result<RawAnalysisPayload> {
    let text = read_text(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&text).context("Analysis payload is not valid JSON")?;
    if !value.is_object() {
        anyhow::bail!("Analysis payload must be a JSON object");
    }
    Ok(RawAnalysisPayload::from_value(value))
}
