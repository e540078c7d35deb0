//! # reencode_to_size
//!
//! Re-encode a video so it lands near a target file size. The clip's
//! duration (from ffprobe) and a fixed audio reserve decide the video
//! bitrate, and ffmpeg then runs a two-pass encode at that bitrate while
//! stream-copying the audio.
//!
//! - [`capability`]: which encoder ffmpeg offers, first match from a
//!   preference list.
//! - [`duration`]: clip length via ffprobe.
//! - [`bitrate`]: size budget to video kbps.
//! - [`encode`]: the two ffmpeg passes.
//! - [`app`]: the interactive run tying them together.

pub mod app;
pub mod bitrate;
pub mod capability;
pub mod config;
pub mod duration;
pub mod encode;
pub mod error;
pub mod tool;

pub use app::{output_path, App, EncodeSummary, Outcome};
pub use bitrate::{calculate_video_bitrate, BitrateBudget};
pub use config::Config;
pub use error::{Error, Result};
pub use tool::{Capture, SystemRunner, ToolCommand, ToolOutput, ToolRunner};
