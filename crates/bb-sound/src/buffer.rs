//! Multichannel f64 sound buffer with the 16-bit big-endian encoder.

use alloc::vec::Vec;

use crate::error::SoundError;
use crate::format::SoundFormat;

/// Largest sample value representable by the encoder.
pub const MAX_AMPLITUDE: f64 = 32767.0;

/// Smallest sample value representable by the encoder.
pub const MIN_AMPLITUDE: f64 = -32767.0;

const BYTES_PER_CHANNEL: usize = 2;

/// An in-memory representation of sampled auditory content.
///
/// Channels are independent f64 sample arrays of equal length. The first
/// channel added fixes the per-channel sample count for the buffer's
/// lifetime. Sample values are unconstrained in memory and are only
/// clamped when [`encode`](SoundBuffer::encode) serializes them.
///
/// Regardless of the source material's original layout, every buffer
/// declares signed 16-bit big-endian PCM output, so `encode` always
/// produces the same wire format.
///
/// A buffer is mutated through `&mut self` only: construct it fully,
/// then share it immutably with operators and the encoder. This replaces
/// the per-call locking of ad-hoc sharing schemes with an invariant the
/// borrow checker enforces.
#[derive(Clone, Debug)]
pub struct SoundBuffer {
    channels: Vec<Vec<f64>>,
    format: SoundFormat,
    sample_count: usize,
}

impl SoundBuffer {
    /// Create an empty buffer with the given sampling rate (in Hz).
    pub fn new(sample_rate: f32) -> Self {
        Self {
            channels: Vec::new(),
            format: SoundFormat::output(sample_rate),
            sample_count: 0,
        }
    }

    /// Create a buffer from pre-built channels, all of equal length.
    pub fn from_channels(
        sample_rate: f32,
        channels: Vec<Vec<f64>>,
    ) -> Result<Self, SoundError> {
        let mut sound = Self::new(sample_rate);
        for channel in channels {
            sound.add_channel(channel)?;
        }
        Ok(sound)
    }

    /// Append a channel. One channel is mono, two is stereo, etc.
    ///
    /// The first channel fixes the buffer's sample count; later channels
    /// must have exactly that length or the call fails and the buffer is
    /// left unchanged.
    pub fn add_channel(&mut self, samples: Vec<f64>) -> Result<(), SoundError> {
        if self.sample_count == 0 && self.channels.is_empty() {
            self.sample_count = samples.len();
        }
        if samples.len() != self.sample_count {
            return Err(SoundError::ChannelLengthMismatch {
                expected: self.sample_count,
                actual: samples.len(),
            });
        }
        self.channels.push(samples);
        self.format = self.format.with_channels(self.channels.len() as u16);
        Ok(())
    }

    /// Append another buffer's content to this one, channel by channel.
    ///
    /// Requires the two buffers to [`matches`](SoundBuffer::matches);
    /// afterwards this buffer's sample count is the sum of both.
    pub fn append(&mut self, other: &SoundBuffer) -> Result<(), SoundError> {
        if !self.matches(other) {
            return Err(SoundError::FormatMismatch);
        }
        for (channel, extra) in self.channels.iter_mut().zip(&other.channels) {
            channel.extend_from_slice(extra);
        }
        self.sample_count += other.sample_count;
        Ok(())
    }

    /// The format descriptor for this buffer.
    pub fn format(&self) -> &SoundFormat {
        &self.format
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// The sampling rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.format.sample_rate
    }

    /// Read-only access to one channel's samples.
    pub fn channel(&self, ch: usize) -> &[f64] {
        &self.channels[ch]
    }

    /// Mutable access to one channel's samples.
    pub fn channel_mut(&mut self, ch: usize) -> &mut [f64] {
        &mut self.channels[ch]
    }

    /// Length of this sound in microseconds.
    pub fn microsecond_length(&self) -> u64 {
        (self.sample_count as f64 / self.format.sample_rate as f64 * 1_000_000.0) as u64
    }

    /// Length of this sound in milliseconds.
    pub fn millisecond_length(&self) -> u64 {
        self.microsecond_length() / 1000
    }

    /// Compatibility test used by operators and `append`: formats match
    /// and sample counts are equal.
    pub fn matches(&self, other: &SoundBuffer) -> bool {
        self.format.matches(&other.format) && self.sample_count == other.sample_count
    }

    /// Serialize to interleaved 16-bit signed big-endian PCM.
    ///
    /// Each sample is clamped to `[MIN_AMPLITUDE, MAX_AMPLITUDE]` and
    /// truncated. Channel `c`, sample `i` lands at byte offset
    /// `frame_size * i + 2 * c`; the result is `sample_count * 2 *
    /// channel_count` bytes.
    pub fn encode(&self) -> Vec<u8> {
        let frame_size = self.channels.len() * BYTES_PER_CHANNEL;
        let mut raw = alloc::vec![0u8; self.sample_count * frame_size];

        for (ch, signal) in self.channels.iter().enumerate() {
            let offset = ch * BYTES_PER_CHANNEL;
            for (i, &sample) in signal.iter().enumerate() {
                let scaled = scale_sample(sample);
                raw[frame_size * i + offset] = (scaled >> 8) as u8;
                raw[frame_size * i + offset + 1] = (scaled & 0xff) as u8;
            }
        }
        raw
    }
}

/// Clamp a sample into the signed 16-bit range and truncate.
fn scale_sample(sample: f64) -> i16 {
    sample.clamp(MIN_AMPLITUDE, MAX_AMPLITUDE) as i16
}
