//! Video bitrate needed to land on a target file size.

/// Bits in one megabyte (MiB-based, as the size budget has always been).
const BITS_PER_MB: f64 = 8.0 * 1024.0 * 1024.0;

/// Audio streams assumed by [`calculate_video_bitrate`].
const ASSUMED_AUDIO_STREAMS: u32 = 2;

/// Inputs to the size budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitrateBudget {
    pub target_size_mb: f64,
    /// Bitrate of each audio stream, in kbps.
    pub audio_bitrate_kbps: f64,
    pub audio_streams: u32,
}

impl BitrateBudget {
    /// Video bitrate in kbps for a clip of `duration_secs`.
    ///
    /// The raw result is returned: zero, negative or non-finite values are
    /// possible and are left to the caller.
    pub fn video_bitrate_kbps(&self, duration_secs: f64) -> f64 {
        let target_bits = self.target_size_mb * BITS_PER_MB;
        let audio_bps = self.audio_bitrate_kbps * 1000.0 * f64::from(self.audio_streams);
        (target_bits / duration_secs - audio_bps) / 1000.0
    }
}

/// Video bitrate in kbps, reserving `audio_bitrate_kbps` for each of two
/// audio streams.
pub fn calculate_video_bitrate(duration_secs: f64, target_size_mb: f64, audio_bitrate_kbps: f64) -> f64 {
    BitrateBudget {
        target_size_mb,
        audio_bitrate_kbps,
        audio_streams: ASSUMED_AUDIO_STREAMS,
    }
    .video_bitrate_kbps(duration_secs)
}
