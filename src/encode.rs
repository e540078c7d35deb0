//! Two-pass ffmpeg encode.
//!
//! Pass 1 analyses the video only and writes ffmpeg's pass log
//! (`ffmpeg2pass-0.log*`) into the working directory; pass 2 reads it back,
//! re-encodes the video at the same bitrate and stream-copies every audio
//! stream. The log files are left behind and a stale log from an earlier run
//! in the same directory is picked up as-is.

use std::path::{Path, PathBuf};

use crate::tool::{Capture, ToolCommand, ToolRunner};
use crate::{Error, Result};

/// Everything both passes need.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoPassEncode {
    pub input: PathBuf,
    pub output: PathBuf,
    pub video_bitrate_kbps: f64,
    pub encoder: String,
    /// Where pass 1 sends its discarded output.
    pub null_device: PathBuf,
}

/// Exit codes of both passes, as observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassCodes {
    pub first: Option<i32>,
    pub second: Option<i32>,
}

impl TwoPassEncode {
    fn bitrate_arg(&self) -> String {
        format!("{}k", self.video_bitrate_kbps)
    }

    pub fn first_pass(&self, ffmpeg: &Path) -> ToolCommand {
        let mut cmd = ToolCommand::new(ffmpeg);
        cmd.args(["-y", "-i"]);
        cmd.arg(&self.input);
        cmd.args(["-c:v", self.encoder.as_str()]);
        cmd.args(["-b:v".to_string(), self.bitrate_arg()]);
        cmd.args(["-pass", "1", "-an", "-f", "null"]);
        cmd.arg(&self.null_device);
        cmd
    }

    pub fn second_pass(&self, ffmpeg: &Path) -> ToolCommand {
        let mut cmd = ToolCommand::new(ffmpeg);
        cmd.arg("-i");
        cmd.arg(&self.input);
        cmd.args(["-c:v", self.encoder.as_str()]);
        cmd.args(["-b:v".to_string(), self.bitrate_arg()]);
        cmd.args(["-pass", "2", "-c:a", "copy", "-map", "0"]);
        cmd.arg(&self.output);
        cmd
    }
}

/// Run pass 1 then pass 2, blocking on each.
///
/// Without `strict`, a failing pass is logged and otherwise ignored: pass 2
/// always runs. With `strict`, the first failing pass ends the run with
/// [`Error::PassFailed`].
pub fn run_two_pass(
    runner: &dyn ToolRunner,
    ffmpeg: &Path,
    job: &TwoPassEncode,
    strict: bool,
) -> Result<PassCodes> {
    tracing::info!(
        "two-pass encode {} -> {} ({}, {} kbps)",
        job.input.display(),
        job.output.display(),
        job.encoder,
        job.video_bitrate_kbps
    );

    let first = run_pass(runner, &job.first_pass(ffmpeg), 1, strict)?;
    let second = run_pass(runner, &job.second_pass(ffmpeg), 2, strict)?;

    Ok(PassCodes { first, second })
}

fn run_pass(runner: &dyn ToolRunner, cmd: &ToolCommand, pass: u8, strict: bool) -> Result<Option<i32>> {
    let output = runner.run(cmd, Capture::Inherit)?;
    if !output.success() {
        if strict {
            return Err(Error::PassFailed {
                pass,
                code: output.code,
            });
        }
        tracing::warn!("pass {pass} exited with {:?}; continuing", output.code);
    }
    Ok(output.code)
}
