//! Binary operators: two matching source buffers combined per-sample.

use bb_sound::{SoundBuffer, SoundError};

use crate::zeroed_destination;

/// A two-source, one-destination per-sample transform.
///
/// Both sources must [`matches`](SoundBuffer::matches) each other (and
/// any caller-provided destination); otherwise the operation fails up
/// front with [`SoundError::FormatMismatch`] and nothing is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `dest[i] = a[i] + b[i]`
    Add,
    /// `dest[i] = a[i] * b[i]`
    Multiply,
}

impl BinaryOp {
    /// Apply to every channel pair, producing a new destination.
    pub fn apply(
        &self,
        src1: &SoundBuffer,
        src2: &SoundBuffer,
    ) -> Result<SoundBuffer, SoundError> {
        if !src1.matches(src2) {
            return Err(SoundError::FormatMismatch);
        }
        let mut dest = zeroed_destination(src1, src1.sample_rate());
        self.run(src1, src2, &mut dest);
        Ok(dest)
    }

    /// Apply into a caller-provided destination, which must match `src1`.
    pub fn apply_into(
        &self,
        src1: &SoundBuffer,
        src2: &SoundBuffer,
        dest: &mut SoundBuffer,
    ) -> Result<(), SoundError> {
        if !src1.matches(src2) || !src1.matches(dest) {
            return Err(SoundError::FormatMismatch);
        }
        self.run(src1, src2, dest);
        Ok(())
    }

    /// Shared per-channel driver loop.
    fn run(&self, src1: &SoundBuffer, src2: &SoundBuffer, dest: &mut SoundBuffer) {
        for ch in 0..src1.channel_count() {
            self.apply_channel(src1.channel(ch), src2.channel(ch), dest.channel_mut(ch));
        }
    }

    fn apply_channel(&self, source1: &[f64], source2: &[f64], destination: &mut [f64]) {
        match self {
            BinaryOp::Add => {
                for i in 0..source1.len() {
                    destination[i] = source1[i] + source2[i];
                }
            }
            BinaryOp::Multiply => {
                for i in 0..source1.len() {
                    destination[i] = source1[i] * source2[i];
                }
            }
        }
    }
}
