//! Finite impulse response filter weights and convolution kernel.

/// An FIR filter: a fixed window of convolution weights.
///
/// `weights[0]` applies to the current sample, `weights[k]` to the
/// sample `k` positions back.
#[derive(Clone, Debug, PartialEq)]
pub struct FirFilter {
    weights: Vec<f64>,
}

impl FirFilter {
    /// Create a filter from its weights.
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Number of weights (i.e., coefficients) in this filter.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the filter has no weights.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Get one weight; out-of-range indices read as 0.0.
    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(index).copied().unwrap_or(0.0)
    }

    /// Convolve `source` into `destination` (equal-length slices).
    ///
    /// The first `n-1` output samples have no full input window and are
    /// copied from the source verbatim, not zero-padded. From `n-1` on,
    /// `destination[i] = sum(weights[k] * source[i-k])`.
    pub(crate) fn apply(&self, source: &[f64], destination: &mut [f64]) {
        let n = self.weights.len();
        if n == 0 {
            destination.copy_from_slice(source);
            return;
        }

        let head = (n - 1).min(source.len());
        destination[..head].copy_from_slice(&source[..head]);

        for i in head..source.len() {
            let mut sum = 0.0;
            for (k, &weight) in self.weights.iter().enumerate() {
                sum += source[i - k] * weight;
            }
            destination[i] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_weight_is_identity() {
        let fir = FirFilter::new(vec![1.0]);
        let source = [3.0, -2.0, 7.5, 0.0];
        let mut dest = [0.0; 4];
        fir.apply(&source, &mut dest);
        assert_eq!(dest, source);
    }

    #[test]
    fn leading_samples_copied_verbatim() {
        let fir = FirFilter::new(vec![0.5, 0.5]);
        let source = [8.0, 2.0, 4.0];
        let mut dest = [0.0; 3];
        fir.apply(&source, &mut dest);
        // index 0 has no full window; indices 1+ are averaged pairs
        assert_eq!(dest, [8.0, 5.0, 3.0]);
    }

    #[test]
    fn three_tap_window_sums_backwards() {
        let fir = FirFilter::new(vec![1.0, 2.0, 3.0]);
        let source = [1.0, 1.0, 1.0, 2.0];
        let mut dest = [0.0; 4];
        fir.apply(&source, &mut dest);
        assert_eq!(dest[0], 1.0);
        assert_eq!(dest[1], 1.0);
        assert_eq!(dest[2], 1.0 + 2.0 + 3.0);
        assert_eq!(dest[3], 2.0 * 1.0 + 1.0 * 2.0 + 1.0 * 3.0);
    }

    #[test]
    fn reused_destination_is_overwritten_not_accumulated() {
        let fir = FirFilter::new(vec![1.0]);
        let source = [1.0, 2.0];
        let mut dest = [9.0, 9.0];
        fir.apply(&source, &mut dest);
        assert_eq!(dest, source);
    }

    #[test]
    fn out_of_range_weight_reads_zero() {
        let fir = FirFilter::new(vec![0.25]);
        assert_eq!(fir.weight(0), 0.25);
        assert_eq!(fir.weight(5), 0.0);
    }
}
