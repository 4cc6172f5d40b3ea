//! Decoders and synthesis for the boombox engine.
//!
//! Turns raw encoded bytes (8/16-bit, signed/unsigned, either byte
//! order, mono/stereo, optionally G.711 companded) into canonical
//! [`bb_sound::SoundBuffer`]s, generates sine waves when no source
//! material exists, and parses WAV/AU containers into the raw-bytes +
//! format-descriptor shape the decoder consumes.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod au;
mod decode;
mod g711;
mod synth;
mod wav;

pub use au::load_au;
pub use decode::decode;
pub use g711::{alaw_to_linear, mulaw_to_linear};
pub use synth::sine_wave;
pub use wav::{load_wav, sound_to_wav};

/// Error type for decoding and container parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Invalid file header or magic bytes
    InvalidHeader,
    /// Unexpected end of input
    UnexpectedEof,
    /// Encoding or bit depth the decoder cannot normalize
    UnsupportedEncoding,
    /// More channels than the deinterleaver handles
    UnsupportedChannelLayout(u16),
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::InvalidHeader => write!(f, "invalid header"),
            CodecError::UnexpectedEof => write!(f, "unexpected end of input"),
            CodecError::UnsupportedEncoding => write!(f, "unsupported encoding"),
            CodecError::UnsupportedChannelLayout(n) => {
                write!(f, "unsupported channel layout: {} channels", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}
