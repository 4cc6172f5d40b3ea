//! Unary operators: one source buffer in, one destination out.

use bb_sound::{SoundBuffer, SoundError};

use crate::fir::FirFilter;
use crate::zeroed_destination;

/// A one-source, one-destination per-sample transform.
///
/// All variants dispatch through one per-channel driver loop. By
/// default the destination mirrors the source's rate and shape;
/// `SpeedChange` overrides the declared rate while copying samples
/// unchanged, which shifts apparent playback speed downstream without
/// resampling.
#[derive(Clone, Debug)]
pub enum UnaryOp {
    /// Negate every sample
    Invert,
    /// Play the signal back to front
    Reverse,
    /// Add uniform noise drawn from `(-max, max]`
    Noise { max: f64, rng: fastrand::Rng },
    /// Relabel the destination's sample rate as `rate * multiplier`
    SpeedChange { multiplier: f64 },
    /// Convolve with an FIR filter
    FirFilter(FirFilter),
}

impl UnaryOp {
    /// Noise operator seeded from entropy.
    pub fn noise(max: f64) -> Self {
        UnaryOp::Noise { max, rng: fastrand::Rng::new() }
    }

    /// Noise operator with a fixed seed, for reproducible output.
    pub fn noise_seeded(max: f64, seed: u64) -> Self {
        UnaryOp::Noise { max, rng: fastrand::Rng::with_seed(seed) }
    }

    /// Speed-change operator (no resampling; see the type docs).
    pub fn speed_change(multiplier: f64) -> Self {
        UnaryOp::SpeedChange { multiplier }
    }

    /// FIR convolution operator.
    pub fn fir(filter: FirFilter) -> Self {
        UnaryOp::FirFilter(filter)
    }

    /// Apply to every channel of `src`, producing a new destination.
    pub fn apply(&mut self, src: &SoundBuffer) -> SoundBuffer {
        let mut dest = zeroed_destination(src, self.destination_rate(src));
        self.run(src, &mut dest);
        dest
    }

    /// Apply into a caller-provided destination.
    ///
    /// The destination must have the shape `apply` would construct:
    /// same sample count and channel count as `src`, and this
    /// operator's declared destination rate.
    pub fn apply_into(
        &mut self,
        src: &SoundBuffer,
        dest: &mut SoundBuffer,
    ) -> Result<(), SoundError> {
        let compatible = dest.sample_rate() == self.destination_rate(src)
            && dest.sample_count() == src.sample_count()
            && dest.channel_count() == src.channel_count();
        if !compatible {
            return Err(SoundError::FormatMismatch);
        }
        self.run(src, dest);
        Ok(())
    }

    /// The declared sample rate of this operator's destination.
    fn destination_rate(&self, src: &SoundBuffer) -> f32 {
        match self {
            UnaryOp::SpeedChange { multiplier } => {
                (src.sample_rate() as f64 * multiplier) as f32
            }
            _ => src.sample_rate(),
        }
    }

    /// Shared per-channel driver loop.
    fn run(&mut self, src: &SoundBuffer, dest: &mut SoundBuffer) {
        for ch in 0..src.channel_count() {
            self.apply_channel(src.channel(ch), dest.channel_mut(ch));
        }
    }

    fn apply_channel(&mut self, source: &[f64], destination: &mut [f64]) {
        match self {
            UnaryOp::Invert => {
                for (d, &s) in destination.iter_mut().zip(source) {
                    *d = -s;
                }
            }
            UnaryOp::Reverse => {
                let len = source.len();
                for i in 0..len {
                    destination[i] = source[len - 1 - i];
                }
            }
            UnaryOp::Noise { max, rng } => {
                for (d, &s) in destination.iter_mut().zip(source) {
                    *d = s + (*max - rng.f64() * *max * 2.0);
                }
            }
            UnaryOp::SpeedChange { .. } => destination.copy_from_slice(source),
            UnaryOp::FirFilter(fir) => fir.apply(source, destination),
        }
    }
}
