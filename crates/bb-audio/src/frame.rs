//! Playback frame type.

/// A stereo playback frame (16-bit integer).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub left: i16,
    pub right: i16,
}

impl Frame {
    /// Create a silent frame.
    pub const fn silence() -> Self {
        Self { left: 0, right: 0 }
    }

    /// Create a mono frame (same value on both legs).
    pub const fn mono(value: i16) -> Self {
        Self { left: value, right: value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_is_zero() {
        assert_eq!(Frame::silence(), Frame { left: 0, right: 0 });
    }

    #[test]
    fn mono_duplicates_value() {
        assert_eq!(Frame::mono(-5), Frame { left: -5, right: -5 });
    }
}
