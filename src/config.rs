//! Run configuration.

use std::path::PathBuf;

use crate::bitrate::BitrateBudget;
use crate::{Error, Result};

/// Default target output size in megabytes.
pub const DEFAULT_TARGET_SIZE_MB: f64 = 24.5;
/// Default bitrate reserved for each audio stream, in kbps.
pub const DEFAULT_AUDIO_BITRATE_KBPS: f64 = 192.0;
/// Number of audio streams assumed to be present.
pub const DEFAULT_AUDIO_STREAMS: u32 = 2;
/// Video encoders in order of preference. The last one is used unprobed.
pub const DEFAULT_ENCODERS: &[&str] = &["libx264", "libx265", "mpeg4"];
pub const DEFAULT_OUTPUT_PREFIX: &str = "reencoded_";

/// Null sink the first pass writes to.
pub fn default_null_device() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("NUL")
    } else {
        PathBuf::from("/dev/null")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub budget: BitrateBudget,
    pub encoders: Vec<String>,
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
    pub null_device: PathBuf,
    pub output_prefix: String,
    /// Check exit codes of the probe and both encode passes.
    pub strict: bool,
    /// Parse ffprobe's stdout and stderr as one stream.
    pub merge_probe_stderr: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget: BitrateBudget {
                target_size_mb: DEFAULT_TARGET_SIZE_MB,
                audio_bitrate_kbps: DEFAULT_AUDIO_BITRATE_KBPS,
                audio_streams: DEFAULT_AUDIO_STREAMS,
            },
            encoders: DEFAULT_ENCODERS.iter().map(|s| s.to_string()).collect(),
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
            null_device: default_null_device(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            strict: false,
            merge_probe_stderr: false,
        }
    }
}

impl Config {
    /// Reject values the run cannot work with at all.
    ///
    /// Degenerate but well-formed budgets (a target so small the bitrate
    /// comes out negative) are accepted and passed through.
    pub fn validate(&self) -> Result<()> {
        if self.encoders.is_empty() {
            return Err(Error::InvalidConfig("encoder list is empty".into()));
        }
        if let Some(name) = self.encoders.iter().find(|e| e.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!("blank encoder name {name:?}")));
        }
        let size = self.budget.target_size_mb;
        if !size.is_finite() || size < 0.0 {
            return Err(Error::InvalidConfig(format!("target size {size} MB")));
        }
        let audio = self.budget.audio_bitrate_kbps;
        if !audio.is_finite() || audio < 0.0 {
            return Err(Error::InvalidConfig(format!("audio bitrate {audio} kbps")));
        }
        Ok(())
    }
}
