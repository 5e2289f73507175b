/// Fixed capture quality parameters selected when a recording starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingPreset {
    /// Target sample rate in Hz.
    pub sample_rate: u32,
    /// Target channel count.
    pub channels: u16,
    /// Target encoder bit rate in bits per second.
    pub bit_rate: u32,
    /// Bits per sample for linear PCM output.
    pub bit_depth: u16,
}

impl RecordingPreset {
    /// The "high quality" preset: 44.1kHz stereo, 128kbps, 16-bit PCM.
    pub const HIGH_QUALITY: Self = Self {
        sample_rate: 44_100,
        channels: 2,
        bit_rate: 128_000,
        bit_depth: 16,
    };
}

impl Default for RecordingPreset {
    fn default() -> Self {
        Self::HIGH_QUALITY
    }
}
