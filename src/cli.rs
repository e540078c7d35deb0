use std::path::PathBuf;

use clap::Parser;

use reencode_to_size::config::{
    DEFAULT_AUDIO_BITRATE_KBPS, DEFAULT_AUDIO_STREAMS, DEFAULT_TARGET_SIZE_MB,
};
use reencode_to_size::Config;

/// Re-encode a video to fit a target size using two-pass ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "reencode-to-size", author, version, about)]
pub struct Args {
    /// Input video. Prompted for on stdin when omitted.
    pub input: Option<PathBuf>,

    /// Target output size in megabytes.
    #[arg(long, default_value_t = DEFAULT_TARGET_SIZE_MB)]
    pub target_size_mb: f64,

    /// Bitrate reserved per audio stream (kbps).
    #[arg(long, default_value_t = DEFAULT_AUDIO_BITRATE_KBPS)]
    pub audio_bitrate: f64,

    /// Number of audio streams to reserve bitrate for.
    #[arg(long, default_value_t = DEFAULT_AUDIO_STREAMS)]
    pub audio_streams: u32,

    /// Video encoder to try, in order; repeat to build a list. The last one
    /// is used without checking. [default: libx264 libx265 mpeg4]
    #[arg(long = "encoder", value_name = "NAME")]
    pub encoders: Vec<String>,

    /// ffmpeg executable.
    #[arg(long, default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,

    /// ffprobe executable.
    #[arg(long, default_value = "ffprobe")]
    pub ffprobe: PathBuf,

    /// Fail on a non-zero exit from ffprobe or either ffmpeg pass.
    #[arg(long)]
    pub strict: bool,

    /// Parse ffprobe's stderr together with its stdout.
    #[arg(long)]
    pub merge_probe_stderr: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();
        config.budget.target_size_mb = self.target_size_mb;
        config.budget.audio_bitrate_kbps = self.audio_bitrate;
        config.budget.audio_streams = self.audio_streams;
        if !self.encoders.is_empty() {
            config.encoders = self.encoders.clone();
        }
        config.ffmpeg = self.ffmpeg.clone();
        config.ffprobe = self.ffprobe.clone();
        config.strict = self.strict;
        config.merge_probe_stderr = self.merge_probe_stderr;
        config
    }
}
