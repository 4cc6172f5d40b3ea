//! AU (".snd") container reading.
//!
//! AU headers are big-endian and the payload is commonly G.711
//! mu-law, so this path exercises both the companding and big-endian
//! decode branches.

use bb_sound::{SoundBuffer, SoundEncoding, SoundFormat};

use crate::{decode, CodecError};

const AU_MAGIC: &[u8; 4] = b".snd";
const HEADER_LEN: usize = 24;

// Encoding field values from the AU header definition
const AU_MULAW_8: u32 = 1;
const AU_LINEAR_8: u32 = 2;
const AU_LINEAR_16: u32 = 3;
const AU_ALAW_8: u32 = 27;

/// Load an AU file from raw bytes into a [`SoundBuffer`].
pub fn load_au(data: &[u8]) -> Result<SoundBuffer, CodecError> {
    if data.len() < HEADER_LEN {
        return Err(CodecError::UnexpectedEof);
    }
    if &data[0..4] != AU_MAGIC {
        return Err(CodecError::InvalidHeader);
    }

    let data_offset = read_u32_be(data, 4) as usize;
    let data_size = read_u32_be(data, 8) as usize;
    let au_encoding = read_u32_be(data, 12);
    let sample_rate = read_u32_be(data, 16);
    let channels = read_u32_be(data, 20);

    if data_offset < HEADER_LEN || data_offset > data.len() {
        return Err(CodecError::InvalidHeader);
    }
    if channels == 0 || channels > 2 {
        return Err(CodecError::UnsupportedChannelLayout(channels as u16));
    }

    let (encoding, bits) = match au_encoding {
        AU_MULAW_8 => (SoundEncoding::MuLaw, 8),
        AU_ALAW_8 => (SoundEncoding::ALaw, 8),
        AU_LINEAR_8 => (SoundEncoding::PcmSigned, 8),
        AU_LINEAR_16 => (SoundEncoding::PcmSigned, 16),
        _ => return Err(CodecError::UnsupportedEncoding),
    };

    let format = SoundFormat::new(encoding, sample_rate as f32, bits, channels as u16, true);

    // data_size of 0xFFFFFFFF means "unknown"; read to the end either way
    let end = data_offset.saturating_add(data_size).min(data.len());
    decode(&data[data_offset..end], &format)
}

fn read_u32_be(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
