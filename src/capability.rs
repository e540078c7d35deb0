//! Encoder availability and selection.

use std::path::Path;

use crate::tool::{Capture, ToolCommand, ToolRunner};
use crate::{Error, Result};

/// Whether ffmpeg's `-codecs` listing mentions `encoder`.
///
/// Queries ffmpeg on every call. The exit status is not consulted; only a
/// failure to start ffmpeg is an error.
pub fn encoder_available(runner: &dyn ToolRunner, ffmpeg: &Path, encoder: &str) -> Result<bool> {
    let mut cmd = ToolCommand::new(ffmpeg);
    cmd.arg("-codecs");
    let output = runner.run(&cmd, Capture::Separate)?;
    Ok(output.stdout.contains(encoder))
}

/// Pick the first available encoder from `candidates`.
///
/// Every candidate but the last is probed in order and the first hit wins.
/// The last candidate is the fallback and is returned without probing.
/// `report` receives a status line for each miss.
pub fn select_encoder<P, R>(candidates: &[String], mut probe: P, mut report: R) -> Result<String>
where
    P: FnMut(&str) -> Result<bool>,
    R: FnMut(&str),
{
    let (fallback, probed) = candidates
        .split_last()
        .ok_or_else(|| Error::InvalidConfig("encoder list is empty".into()))?;

    for (i, encoder) in probed.iter().enumerate() {
        if probe(encoder.as_str())? {
            tracing::info!("using encoder {encoder}");
            return Ok(encoder.clone());
        }
        let next = &candidates[i + 1];
        if i + 1 == probed.len() {
            report(&format!("Encoder {encoder} not found. Using {next}."));
        } else {
            report(&format!("Encoder {encoder} not found. Trying {next}."));
        }
    }

    tracing::info!("falling back to encoder {fallback}");
    Ok(fallback.clone())
}
