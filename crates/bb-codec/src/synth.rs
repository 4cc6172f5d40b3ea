//! Sine-wave synthesis for when no source material is available.

use alloc::vec::Vec;

use bb_sound::SoundBuffer;

/// Synthesize a single-channel sine wave.
///
/// Length is in microseconds (matching the playback clip interface);
/// amplitude is in the encoder's `[0.0, 32767.0]` range. Produces
/// `trunc(sample_rate * length / 1e6)` samples of
/// `amplitude * sin(2 pi * frequency * i / sample_rate)`.
pub fn sine_wave(
    frequency: f64,
    length_micros: u64,
    sample_rate: f32,
    amplitude: f64,
) -> SoundBuffer {
    let n = (sample_rate as f64 * length_micros as f64 / 1_000_000.0) as usize;
    let radians_per_sample = core::f64::consts::TAU * frequency / sample_rate as f64;

    let signal: Vec<f64> = (0..n)
        .map(|i| amplitude * libm::sin(radians_per_sample * i as f64))
        .collect();

    let mut sound = SoundBuffer::new(sample_rate);
    sound
        .add_channel(signal)
        .expect("first channel is always accepted");
    sound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_at_8khz_gives_8000_samples() {
        let sound = sine_wave(440.0, 1_000_000, 8000.0, 1000.0);
        assert_eq!(sound.sample_count(), 8000);
        assert_eq!(sound.channel_count(), 1);
        assert_eq!(sound.sample_rate(), 8000.0);
    }

    #[test]
    fn starts_at_zero_and_stays_within_amplitude() {
        let sound = sine_wave(440.0, 1_000_000, 8000.0, 1000.0);
        assert!(sound.channel(0)[0].abs() < 1e-9);
        let peak = sound
            .channel(0)
            .iter()
            .fold(0.0f64, |acc, &s| acc.max(s.abs()));
        assert!(peak <= 1000.0 + 1e-9);
        assert!(peak > 900.0);
    }

    #[test]
    fn quarter_period_hits_the_peak() {
        // 1 Hz at 4 Hz sampling: samples at 0, pi/2, pi, 3pi/2
        let sound = sine_wave(1.0, 1_000_000, 4.0, 100.0);
        let signal = sound.channel(0);
        assert!(signal[0].abs() < 1e-9);
        assert!((signal[1] - 100.0).abs() < 1e-9);
        assert!(signal[2].abs() < 1e-7);
        assert!((signal[3] + 100.0).abs() < 1e-7);
    }

    #[test]
    fn fractional_length_truncates() {
        let sound = sine_wave(440.0, 100, 8000.0, 1.0);
        // 8000 * 100 / 1e6 = 0.8 samples -> 0
        assert_eq!(sound.sample_count(), 0);
    }
}
