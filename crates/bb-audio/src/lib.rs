//! Audio output backend for boombox.
//!
//! This is the playback collaborator at the engine's byte-stream
//! boundary: it accepts 16-bit frames and presents them on a device
//! line opened at the sound's declared sample rate. It never touches
//! buffer internals; failures here surface as [`AudioError`] and leave
//! sound state untouched.

mod cpal_backend;
mod frame;
mod sink;

pub use cpal_backend::CpalOutput;
pub use frame::Frame;
pub use sink::{AudioError, AudioSink};
