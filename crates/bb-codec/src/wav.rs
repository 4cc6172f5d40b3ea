//! WAV container reading and writing for PCM audio.

use alloc::vec::Vec;

use bb_sound::{SoundBuffer, SoundEncoding, SoundFormat, MAX_AMPLITUDE, MIN_AMPLITUDE};

use crate::{decode, CodecError};

// --- Reading ---

/// Load a WAV file from raw bytes into a [`SoundBuffer`].
///
/// Accepts uncompressed PCM only: 8-bit (unsigned, per the WAV
/// convention) or 16-bit little-endian, mono or stereo.
pub fn load_wav(data: &[u8]) -> Result<SoundBuffer, CodecError> {
    let header = parse_header(data)?;

    let encoding = if header.bits_per_sample == 8 {
        SoundEncoding::PcmUnsigned
    } else {
        SoundEncoding::PcmSigned
    };
    let format = SoundFormat::new(
        encoding,
        header.sample_rate as f32,
        header.bits_per_sample,
        header.num_channels,
        false,
    );

    let end = (header.data_offset + header.data_size).min(data.len());
    decode(&data[header.data_offset..end], &format)
}

struct WavHeader {
    num_channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
    data_offset: usize,
    data_size: usize,
}

fn parse_header(data: &[u8]) -> Result<WavHeader, CodecError> {
    if data.len() < 44 {
        return Err(CodecError::UnexpectedEof);
    }
    if &data[0..4] != b"RIFF" || &data[8..12] != b"WAVE" {
        return Err(CodecError::InvalidHeader);
    }

    let mut pos = 12;
    let mut fmt: Option<(u16, u32, u16)> = None;
    let mut data_chunk: Option<(usize, usize)> = None;

    while pos + 8 <= data.len() {
        let chunk_id = &data[pos..pos + 4];
        let chunk_size = read_u32_le(data, pos + 4) as usize;

        if chunk_id == b"fmt " && chunk_size >= 16 {
            let format_tag = read_u16_le(data, pos + 8);
            if format_tag != 1 {
                return Err(CodecError::UnsupportedEncoding);
            }
            let channels = read_u16_le(data, pos + 10);
            let rate = read_u32_le(data, pos + 12);
            let bits = read_u16_le(data, pos + 22);
            fmt = Some((channels, rate, bits));
        } else if chunk_id == b"data" {
            data_chunk = Some((pos + 8, chunk_size));
        }

        pos += 8 + chunk_size;
        if pos % 2 != 0 {
            pos += 1;
        }
    }

    let (num_channels, sample_rate, bits_per_sample) = fmt.ok_or(CodecError::InvalidHeader)?;
    let (data_offset, data_size) = data_chunk.ok_or(CodecError::InvalidHeader)?;

    if bits_per_sample != 8 && bits_per_sample != 16 {
        return Err(CodecError::UnsupportedEncoding);
    }
    if !(1..=2).contains(&num_channels) {
        return Err(CodecError::UnsupportedChannelLayout(num_channels));
    }

    Ok(WavHeader { num_channels, sample_rate, bits_per_sample, data_offset, data_size })
}

fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

// --- Writing ---

/// Serialize a buffer as a 16-bit PCM WAV file.
///
/// Samples are clamped the same way the canonical encoder clamps them;
/// WAV data is little-endian, unlike the playback byte stream.
pub fn sound_to_wav(sound: &SoundBuffer) -> Vec<u8> {
    let num_channels = sound.channel_count() as u16;
    let sample_rate = sound.sample_rate() as u32;
    let bits_per_sample: u16 = 16;
    let block_align = num_channels * (bits_per_sample / 8);
    let data_size = sound.sample_count() as u32 * block_align as u32;

    let mut buf = Vec::with_capacity(44 + data_size as usize);
    write_riff_header(&mut buf, data_size);
    write_fmt_chunk(&mut buf, num_channels, sample_rate, block_align, bits_per_sample);
    write_data_chunk(&mut buf, sound, data_size);
    buf
}

fn write_riff_header(buf: &mut Vec<u8>, data_size: u32) {
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&(36 + data_size).to_le_bytes());
    buf.extend_from_slice(b"WAVE");
}

fn write_fmt_chunk(
    buf: &mut Vec<u8>,
    num_channels: u16,
    sample_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
) {
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&num_channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());
}

fn write_data_chunk(buf: &mut Vec<u8>, sound: &SoundBuffer, data_size: u32) {
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for i in 0..sound.sample_count() {
        for ch in 0..sound.channel_count() {
            let sample = sound.channel(ch)[i].clamp(MIN_AMPLITUDE, MAX_AMPLITUDE) as i16;
            buf.extend_from_slice(&sample.to_le_bytes());
        }
    }
}
