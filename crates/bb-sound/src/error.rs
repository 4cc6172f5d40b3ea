//! Error type for buffer and operator compatibility failures.

use core::fmt;

/// Error type for sound buffer operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundError {
    /// Two sounds failed the format/sample-count match check
    FormatMismatch,
    /// A channel's length does not match the buffer's sample count
    ChannelLengthMismatch {
        /// The buffer's fixed per-channel sample count
        expected: usize,
        /// The length of the rejected channel
        actual: usize,
    },
}

impl fmt::Display for SoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundError::FormatMismatch => write!(f, "sound formats do not match"),
            SoundError::ChannelLengthMismatch { expected, actual } => {
                write!(f, "channel length {} does not match sample count {}", actual, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SoundError {}
