//! The shared time base: an immutable, evenly spaced sequence of sample
//! instants.

use crate::error::{SignalError, SignalResult};

/// An ordered, immutable sequence of sample instants with constant spacing.
///
/// Both endpoints are included, so `linspace(0.0, 10.0, 10_000)` spans the
/// full window with step `10 / 9999` seconds. Invariants: at least two
/// samples, strictly increasing, constant step.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBase {
    samples: Vec<f64>,
    step: f64,
}

impl TimeBase {
    /// Builds a time base of `count` evenly spaced instants over
    /// `[start, end]`, inclusive of both endpoints.
    pub fn linspace(start: f64, end: f64, count: usize) -> SignalResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SignalError::time_base("bounds must be finite"));
        }
        if count < 2 {
            return Err(SignalError::time_base(format!(
                "need at least 2 samples, got {}",
                count
            )));
        }
        if end <= start {
            return Err(SignalError::time_base(format!(
                "end ({}) must be greater than start ({})",
                end, start
            )));
        }

        let step = (end - start) / (count - 1) as f64;
        let samples = (0..count).map(|i| start + step * i as f64).collect();
        Ok(Self { samples, step })
    }

    /// Number of sample instants. Always at least 2.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether there are no sample instants. Construction guarantees at
    /// least two, so this only matters to callers generic over collections.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The constant spacing between consecutive instants, in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The sample instants.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// First instant.
    pub fn start(&self) -> f64 {
        self.samples[0]
    }

    /// Last instant.
    pub fn end(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_both_endpoints() {
        let tb = TimeBase::linspace(0.0, 1.0, 5).unwrap();
        assert_eq!(tb.samples(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(tb.step(), 0.25);
        assert_eq!(tb.start(), 0.0);
        assert_eq!(tb.end(), 1.0);
    }

    #[test]
    fn test_default_window_shape() {
        let tb = TimeBase::linspace(0.0, 10.0, 10_000).unwrap();
        assert_eq!(tb.len(), 10_000);
        assert!(!tb.is_empty());
        assert!((tb.step() - 10.0 / 9999.0).abs() < 1e-15);
        assert!((tb.end() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_spacing_is_constant() {
        let tb = TimeBase::linspace(-2.5, 7.5, 1000).unwrap();
        let t = tb.samples();
        for pair in t.windows(2) {
            assert!((pair[1] - pair[0] - tb.step()).abs() < 1e-12);
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_rejects_degenerate_windows() {
        assert!(TimeBase::linspace(0.0, 10.0, 1).is_err());
        assert!(TimeBase::linspace(0.0, 10.0, 0).is_err());
        assert!(TimeBase::linspace(10.0, 10.0, 100).is_err());
        assert!(TimeBase::linspace(10.0, 0.0, 100).is_err());
        assert!(TimeBase::linspace(f64::NAN, 1.0, 100).is_err());
        assert!(TimeBase::linspace(0.0, f64::INFINITY, 100).is_err());
    }
}
