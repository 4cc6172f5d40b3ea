//! Raw encoded bytes + format descriptor → canonical sound buffer.

use alloc::vec::Vec;

use bb_sound::{SoundBuffer, SoundEncoding, SoundFormat};

use crate::{g711, CodecError};

/// Decode raw sample bytes into a [`SoundBuffer`].
///
/// Companded input is first expanded to 16-bit signed big-endian linear
/// PCM (doubling the declared bit depth), then quantized per the
/// declared sample size and byte order, then deinterleaved. The result
/// carries the format's sample rate. A trailing lone byte in 16-bit
/// input is ignored.
pub fn decode(raw: &[u8], format: &SoundFormat) -> Result<SoundBuffer, CodecError> {
    if format.encoding.is_companded() {
        let (expanded, linear) = expand_companded(raw, format)?;
        return decode(&expanded, &linear);
    }

    let signal = match format.bits_per_sample {
        8 => quantize_eight_bit(raw, format),
        16 => quantize_sixteen_bit(raw, format),
        _ => return Err(CodecError::UnsupportedEncoding),
    };

    deinterleave(&signal, format)
}

/// Expand G.711 bytes to 16-bit signed big-endian linear PCM.
fn expand_companded(
    raw: &[u8],
    format: &SoundFormat,
) -> Result<(Vec<u8>, SoundFormat), CodecError> {
    if format.bits_per_sample != 8 {
        return Err(CodecError::UnsupportedEncoding);
    }
    let expand: fn(u8) -> i16 = match format.encoding {
        SoundEncoding::MuLaw => g711::mulaw_to_linear,
        SoundEncoding::ALaw => g711::alaw_to_linear,
        _ => return Err(CodecError::UnsupportedEncoding),
    };

    let mut bytes = Vec::with_capacity(raw.len() * 2);
    for &b in raw {
        bytes.extend_from_slice(&expand(b).to_be_bytes());
    }
    let linear = SoundFormat::new(
        SoundEncoding::PcmSigned,
        format.sample_rate,
        format.bits_per_sample * 2,
        format.channels,
        true,
    );
    Ok((bytes, linear))
}

/// One byte per sample; unsigned encodings are re-centered on zero.
fn quantize_eight_bit(raw: &[u8], format: &SoundFormat) -> Vec<i32> {
    match format.encoding {
        SoundEncoding::PcmSigned => raw.iter().map(|&b| b as i8 as i32).collect(),
        _ => raw.iter().map(|&b| b as i32 - 128).collect(),
    }
}

/// Byte pairs combined per the declared byte order.
fn quantize_sixteen_bit(raw: &[u8], format: &SoundFormat) -> Vec<i32> {
    if format.big_endian {
        raw.chunks_exact(2)
            .map(|c| i16::from_be_bytes([c[0], c[1]]) as i32)
            .collect()
    } else {
        raw.chunks_exact(2)
            .map(|c| i16::from_le_bytes([c[0], c[1]]) as i32)
            .collect()
    }
}

/// Split the decoded value stream into per-channel f64 signals.
fn deinterleave(signal: &[i32], format: &SoundFormat) -> Result<SoundBuffer, CodecError> {
    let channels = match format.channels {
        1 => {
            let mono: Vec<f64> = signal.iter().map(|&v| v as f64).collect();
            alloc::vec![mono]
        }
        2 => {
            let frames = signal.len() / 2;
            let mut left = Vec::with_capacity(frames);
            let mut right = Vec::with_capacity(frames);
            for i in 0..frames {
                left.push(signal[2 * i] as f64);
                right.push(signal[2 * i + 1] as f64);
            }
            alloc::vec![left, right]
        }
        n => return Err(CodecError::UnsupportedChannelLayout(n)),
    };

    Ok(SoundBuffer::from_channels(format.sample_rate, channels)
        .expect("deinterleaved channels share one length"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn fmt(encoding: SoundEncoding, bits: u16, channels: u16, big_endian: bool) -> SoundFormat {
        SoundFormat::new(encoding, 8000.0, bits, channels, big_endian)
    }

    #[test]
    fn sixteen_bit_big_endian_mono() {
        let raw = [0x00, 0x10, 0xFF, 0xF0];
        let sound = decode(&raw, &fmt(SoundEncoding::PcmSigned, 16, 1, true)).unwrap();
        assert_eq!(sound.sample_count(), 2);
        assert_eq!(sound.channel(0), &[16.0, -16.0]);
    }

    #[test]
    fn sixteen_bit_little_endian_mono() {
        let raw = [0x10, 0x00, 0xF0, 0xFF];
        let sound = decode(&raw, &fmt(SoundEncoding::PcmSigned, 16, 1, false)).unwrap();
        assert_eq!(sound.channel(0), &[16.0, -16.0]);
    }

    #[test]
    fn sixteen_bit_stereo_deinterleaves_even_odd() {
        let raw = [0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04];
        let sound = decode(&raw, &fmt(SoundEncoding::PcmSigned, 16, 2, true)).unwrap();
        assert_eq!(sound.channel_count(), 2);
        assert_eq!(sound.channel(0), &[1.0, 3.0]);
        assert_eq!(sound.channel(1), &[2.0, 4.0]);
    }

    #[test]
    fn eight_bit_signed_uses_byte_value() {
        let raw = [0x00, 0x7F, 0x80, 0xFF];
        let sound = decode(&raw, &fmt(SoundEncoding::PcmSigned, 8, 1, true)).unwrap();
        assert_eq!(sound.channel(0), &[0.0, 127.0, -128.0, -1.0]);
    }

    #[test]
    fn eight_bit_unsigned_recenters_on_zero() {
        let raw = [128, 255, 0, 192];
        let sound = decode(&raw, &fmt(SoundEncoding::PcmUnsigned, 8, 1, true)).unwrap();
        assert_eq!(sound.channel(0), &[0.0, 127.0, -128.0, 64.0]);
    }

    #[test]
    fn mulaw_expands_before_quantization() {
        // 0xFF is mu-law zero; 0x00 is the largest negative value
        let raw = [0xFF, 0x00];
        let sound = decode(&raw, &fmt(SoundEncoding::MuLaw, 8, 1, true)).unwrap();
        assert_eq!(sound.channel(0), &[0.0, -32124.0]);
    }

    #[test]
    fn trailing_lone_byte_ignored() {
        let raw = [0x00, 0x10, 0xFF];
        let sound = decode(&raw, &fmt(SoundEncoding::PcmSigned, 16, 1, true)).unwrap();
        assert_eq!(sound.channel(0), &[16.0]);
    }

    #[test]
    fn more_than_two_channels_rejected() {
        let raw = [0u8; 12];
        let err = decode(&raw, &fmt(SoundEncoding::PcmSigned, 16, 3, true)).unwrap_err();
        assert_eq!(err, CodecError::UnsupportedChannelLayout(3));
    }

    #[test]
    fn odd_bit_depth_rejected() {
        let raw = [0u8; 4];
        let err = decode(&raw, &fmt(SoundEncoding::PcmSigned, 12, 1, true)).unwrap_err();
        assert_eq!(err, CodecError::UnsupportedEncoding);
    }

    #[test]
    fn round_trips_canonical_output() {
        let mut sound = SoundBuffer::new(8000.0);
        sound.add_channel(vec![0.0, 1000.0, -1000.0, 32767.0, -32767.0]).unwrap();
        let raw = sound.encode();
        let back = decode(&raw, sound.format()).unwrap();
        assert_eq!(back.channel(0), sound.channel(0));
    }
}
