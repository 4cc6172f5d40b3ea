//! Canonical sound representation for the boombox engine.
//!
//! This crate defines the in-memory form every other part of the engine
//! works with: a multichannel buffer of f64 samples plus a format
//! descriptor. Decoders produce it, operators transform it, and the
//! encoder serializes it to 16-bit signed big-endian PCM for playback.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod buffer;
mod error;
mod format;

pub use buffer::{SoundBuffer, MAX_AMPLITUDE, MIN_AMPLITUDE};
pub use error::SoundError;
pub use format::{SoundEncoding, SoundFormat};
