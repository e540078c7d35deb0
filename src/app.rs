//! The run itself: ask for a file, pick an encoder, size the bitrate and
//! drive the two passes, reporting each step.

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::capability::{encoder_available, select_encoder};
use crate::config::Config;
use crate::duration::{probe_duration, ProbeOptions};
use crate::encode::{run_two_pass, PassCodes, TwoPassEncode};
use crate::tool::ToolRunner;
use crate::{Error, Result};

pub const PROMPT: &str = "Enter the path to the MP4 file: ";
pub const MISSING_INPUT: &str = "File does not exist.";

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The input path did not name an existing file. Nothing was run.
    MissingInput,
    /// Both passes were run; their exit codes are in the summary.
    Encoded(EncodeSummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncodeSummary {
    pub encoder: String,
    pub duration_secs: f64,
    pub video_bitrate_kbps: f64,
    pub output: PathBuf,
    pub passes: PassCodes,
}

/// `prefix` + the input's file name, relative to the working directory.
pub fn output_path(input: &Path, prefix: &str) -> PathBuf {
    let mut name = OsString::from(prefix);
    name.push(input.file_name().unwrap_or(input.as_os_str()));
    PathBuf::from(name)
}

pub struct App<'a> {
    config: Config,
    runner: &'a dyn ToolRunner,
}

impl<'a> App<'a> {
    pub fn new(config: Config, runner: &'a dyn ToolRunner) -> Self {
        Self { config, runner }
    }

    /// Run once. When `input` is `None` the path is read from `stdin`
    /// after printing the prompt; status lines go to `out`.
    pub fn run(
        &self,
        input: Option<PathBuf>,
        stdin: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Outcome> {
        let input = match input {
            Some(path) => path,
            None => read_path(stdin, out)?,
        };

        if !input.is_file() {
            writeln!(out, "{MISSING_INPUT}")?;
            return Ok(Outcome::MissingInput);
        }
        tracing::info!("input {}", input.display());

        let cfg = &self.config;
        let mut misses = Vec::new();
        let selected = select_encoder(
            &cfg.encoders,
            |encoder| encoder_available(self.runner, &cfg.ffmpeg, encoder),
            |line| misses.push(line.to_string()),
        );
        for line in &misses {
            writeln!(out, "{line}")?;
        }
        let encoder = selected?;

        let output = output_path(&input, &cfg.output_prefix);

        let opts = ProbeOptions {
            merge_stderr: cfg.merge_probe_stderr,
            strict: cfg.strict,
        };
        let duration_secs = probe_duration(self.runner, &cfg.ffprobe, &input, opts)?;
        writeln!(out, "Video length: {duration_secs} seconds")?;
        if duration_secs == 0.0 {
            return Err(Error::InvalidDuration(duration_secs));
        }

        let video_bitrate_kbps = cfg.budget.video_bitrate_kbps(duration_secs);
        writeln!(out, "Calculated video bitrate: {video_bitrate_kbps} kbps")?;
        if video_bitrate_kbps <= 0.0 || !video_bitrate_kbps.is_finite() {
            tracing::warn!("video bitrate {video_bitrate_kbps} kbps is not usable; passing it on anyway");
        }
        out.flush()?;

        let job = TwoPassEncode {
            input,
            output,
            video_bitrate_kbps,
            encoder,
            null_device: cfg.null_device.clone(),
        };
        let passes = run_two_pass(self.runner, &cfg.ffmpeg, &job, cfg.strict)?;
        writeln!(out, "Re-encoded video saved as: {}", job.output.display())?;

        Ok(Outcome::Encoded(EncodeSummary {
            encoder: job.encoder,
            duration_secs,
            video_bitrate_kbps,
            output: job.output,
            passes,
        }))
    }
}

fn read_path(stdin: &mut dyn BufRead, out: &mut dyn Write) -> Result<PathBuf> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
