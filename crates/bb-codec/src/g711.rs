//! G.711 companded byte → 16-bit linear PCM expansion.
//!
//! Segment/mantissa form of the standard tables. Expanding here keeps
//! the decode pipeline self-contained instead of leaning on a platform
//! codec for mu-law/A-law sources.

const MULAW_BIAS: i16 = 0x84;

/// Expand one mu-law byte to a linear 16-bit sample.
pub fn mulaw_to_linear(byte: u8) -> i16 {
    // Mu-law bytes are stored complemented
    let b = !byte;
    let segment = (b >> 4) & 0x07;
    let mantissa = (b & 0x0F) as i16;

    let magnitude = (((mantissa << 3) + MULAW_BIAS) << segment) - MULAW_BIAS;
    if b & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Expand one A-law byte to a linear 16-bit sample.
pub fn alaw_to_linear(byte: u8) -> i16 {
    // A-law bytes are stored with alternate bits inverted
    let b = byte ^ 0x55;
    let segment = (b >> 4) & 0x07;
    let mantissa = (b & 0x0F) as i16;

    let magnitude = match segment {
        0 => (mantissa << 4) + 8,
        _ => ((mantissa << 4) + 0x108) << (segment - 1),
    };
    // Sign bit set means positive in A-law
    if b & 0x80 != 0 {
        magnitude
    } else {
        -magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mulaw_known_values() {
        assert_eq!(mulaw_to_linear(0xFF), 0);
        assert_eq!(mulaw_to_linear(0x7F), 0);
        assert_eq!(mulaw_to_linear(0x00), -32124);
        assert_eq!(mulaw_to_linear(0x80), 32124);
    }

    #[test]
    fn mulaw_is_antisymmetric() {
        for b in 0u8..=0x7F {
            assert_eq!(mulaw_to_linear(b), -mulaw_to_linear(b | 0x80));
        }
    }

    #[test]
    fn alaw_known_values() {
        assert_eq!(alaw_to_linear(0xD5), 8);
        assert_eq!(alaw_to_linear(0x55), -8);
        assert_eq!(alaw_to_linear(0xAA), 32256);
        assert_eq!(alaw_to_linear(0x2A), -32256);
    }

    #[test]
    fn alaw_is_antisymmetric() {
        for b in 0u8..=0x7F {
            assert_eq!(alaw_to_linear(b), -alaw_to_linear(b | 0x80));
        }
    }

    #[test]
    fn expansions_are_monotone_within_positive_segments() {
        // Within one mu-law segment, larger mantissas decode larger
        let seg: Vec<i16> = (0..16).map(|m| mulaw_to_linear(!(0x10 | m))).collect();
        assert!(seg.windows(2).all(|w| w[0] < w[1]));
    }
}
