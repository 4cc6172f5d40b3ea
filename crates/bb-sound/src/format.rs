//! Sound format descriptor.

/// How raw sample bytes encode amplitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEncoding {
    /// Linear PCM, signed samples
    PcmSigned,
    /// Linear PCM, unsigned samples
    PcmUnsigned,
    /// G.711 mu-law companded
    MuLaw,
    /// G.711 A-law companded
    ALaw,
}

impl SoundEncoding {
    /// Returns true for companded encodings, which must be expanded to
    /// linear PCM before numeric processing.
    pub fn is_companded(self) -> bool {
        matches!(self, SoundEncoding::MuLaw | SoundEncoding::ALaw)
    }
}

/// Describes the byte-level layout of sampled audio.
///
/// `frame_size` is always `channels * (bits_per_sample / 8)`; the
/// constructors maintain that invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundFormat {
    /// Sample encoding
    pub encoding: SoundEncoding,
    /// Sampling rate in Hz
    pub sample_rate: f32,
    /// Sample size in bits (8 or 16)
    pub bits_per_sample: u16,
    /// Number of interleaved channels
    pub channels: u16,
    /// Size of one frame (all channels) in bytes
    pub frame_size: u16,
    /// Byte order for multi-byte samples
    pub big_endian: bool,
}

impl SoundFormat {
    /// Create a format descriptor. `frame_size` is derived.
    pub fn new(
        encoding: SoundEncoding,
        sample_rate: f32,
        bits_per_sample: u16,
        channels: u16,
        big_endian: bool,
    ) -> Self {
        Self {
            encoding,
            sample_rate,
            bits_per_sample,
            channels,
            frame_size: channels * (bits_per_sample / 8),
            big_endian,
        }
    }

    /// The canonical output format: 16-bit signed PCM, big-endian
    /// (network byte order), channel count not yet known.
    pub fn output(sample_rate: f32) -> Self {
        Self::new(SoundEncoding::PcmSigned, sample_rate, 16, 0, true)
    }

    /// Same format with a different channel count (and frame size).
    pub fn with_channels(self, channels: u16) -> Self {
        Self {
            channels,
            frame_size: channels * (self.bits_per_sample / 8),
            ..self
        }
    }

    /// Compatibility test: sample rate, sample size, channel count and
    /// byte order must agree. The encoding variant is not compared;
    /// companded sources are expanded before comparison matters.
    pub fn matches(&self, other: &SoundFormat) -> bool {
        self.sample_rate == other.sample_rate
            && self.bits_per_sample == other.bits_per_sample
            && self.channels == other.channels
            && self.big_endian == other.big_endian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_is_16bit_signed_big_endian() {
        let fmt = SoundFormat::output(8000.0);
        assert_eq!(fmt.encoding, SoundEncoding::PcmSigned);
        assert_eq!(fmt.bits_per_sample, 16);
        assert_eq!(fmt.channels, 0);
        assert_eq!(fmt.frame_size, 0);
        assert!(fmt.big_endian);
    }

    #[test]
    fn with_channels_updates_frame_size() {
        let fmt = SoundFormat::output(44100.0).with_channels(2);
        assert_eq!(fmt.channels, 2);
        assert_eq!(fmt.frame_size, 4);
    }

    #[test]
    fn matches_ignores_encoding() {
        let a = SoundFormat::new(SoundEncoding::PcmSigned, 8000.0, 16, 1, true);
        let b = SoundFormat::new(SoundEncoding::PcmUnsigned, 8000.0, 16, 1, true);
        assert!(a.matches(&b));
    }

    #[test]
    fn matches_compares_rate_bits_channels_endianness() {
        let base = SoundFormat::new(SoundEncoding::PcmSigned, 8000.0, 16, 1, true);
        assert!(!base.matches(&SoundFormat::new(SoundEncoding::PcmSigned, 11025.0, 16, 1, true)));
        assert!(!base.matches(&SoundFormat::new(SoundEncoding::PcmSigned, 8000.0, 8, 1, true)));
        assert!(!base.matches(&SoundFormat::new(SoundEncoding::PcmSigned, 8000.0, 16, 2, true)));
        assert!(!base.matches(&SoundFormat::new(SoundEncoding::PcmSigned, 8000.0, 16, 1, false)));
    }

    #[test]
    fn companded_detection() {
        assert!(SoundEncoding::MuLaw.is_companded());
        assert!(SoundEncoding::ALaw.is_companded());
        assert!(!SoundEncoding::PcmSigned.is_companded());
        assert!(!SoundEncoding::PcmUnsigned.is_companded());
    }
}
