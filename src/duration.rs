//! Clip duration via ffprobe.

use std::path::Path;

use crate::tool::{Capture, ToolCommand, ToolRunner};
use crate::{Error, Result};

/// How the ffprobe output is collected and checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeOptions {
    /// Parse stderr together with stdout. Any diagnostic text then breaks
    /// the numeric parse.
    pub merge_stderr: bool,
    /// Treat a non-zero ffprobe exit as an error before parsing.
    pub strict: bool,
}

pub fn duration_command(ffprobe: &Path, input: &Path) -> ToolCommand {
    let mut cmd = ToolCommand::new(ffprobe);
    cmd.args([
        "-v",
        "error",
        "-show_entries",
        "format=duration",
        "-of",
        "default=noprint_wrappers=1:nokey=1",
    ]);
    cmd.arg(input);
    cmd
}

/// Duration of `input` in seconds.
pub fn probe_duration(
    runner: &dyn ToolRunner,
    ffprobe: &Path,
    input: &Path,
    opts: ProbeOptions,
) -> Result<f64> {
    let cmd = duration_command(ffprobe, input);
    let capture = if opts.merge_stderr {
        Capture::Merged
    } else {
        Capture::Separate
    };
    let output = runner.run(&cmd, capture)?;

    if opts.strict && !output.success() {
        return Err(Error::tool_failed(
            cmd.tool_name(),
            format!("exited with {:?}: {}", output.code, output.stderr.trim()),
        ));
    }

    parse_duration(&output.stdout)
}

fn parse_duration(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|e| Error::parse("ffprobe", format!("{trimmed:?} is not a duration: {e}")))
}
