//! Per-sample transform operators over sound buffers.
//!
//! Operators come in two arities. A [`UnaryOp`] maps one source buffer
//! to a destination; a [`BinaryOp`] combines two matching sources.
//! Both run one shared per-channel driver loop and either fill a fresh
//! zeroed destination shaped like the source or validate a
//! caller-provided one. Operators carry only their own parameters and
//! never retain a reference to any buffer between calls.

mod binary;
mod fir;
mod unary;

pub use binary::BinaryOp;
pub use fir::FirFilter;
pub use unary::UnaryOp;

use bb_sound::SoundBuffer;

/// Build a zero-filled buffer shaped like `src` at the given rate.
pub(crate) fn zeroed_destination(src: &SoundBuffer, sample_rate: f32) -> SoundBuffer {
    let mut dest = SoundBuffer::new(sample_rate);
    for _ in 0..src.channel_count() {
        dest.add_channel(vec![0.0; src.sample_count()])
            .expect("zeroed channels share one length");
    }
    dest
}
