//! boombox — an in-memory sampled-audio engine.
//!
//! Decode raw encoded audio into a canonical multichannel f64 buffer,
//! transform it with composable per-sample operators, and re-encode it
//! as 16-bit signed big-endian PCM for playback.
//!
//! This crate is the facade: it re-exports the engine crates and adds
//! a keyed sound bank plus a blocking player so callers need only one
//! dependency.

mod bank;
mod player;

pub use bank::{BankEntry, SoundBank, SoundKey};
pub use player::{sound_to_frames, BoomBox};

// Re-export the engine so callers don't need the bb-* crates directly.
pub use bb_audio::{AudioError, AudioSink, CpalOutput, Frame};
pub use bb_codec::{decode, load_au, load_wav, sine_wave, sound_to_wav, CodecError};
pub use bb_ops::{BinaryOp, FirFilter, UnaryOp};
pub use bb_sound::{SoundBuffer, SoundEncoding, SoundError, SoundFormat};
