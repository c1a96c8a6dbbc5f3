//! Elementary waveform synthesis over a shared time base.

use rand::Rng;
use rand_pcg::Pcg32;

use wavescope_spec::{SignalKind, SignalSpec};

use crate::error::{SignalError, SignalResult};
use crate::oscillator::{self, TWO_PI};
use crate::timebase::TimeBase;

/// Synthesizes one waveform sample per time base instant.
///
/// All kinds follow `amplitude · wave(2π·f·t) + offset` except
/// [`SignalKind::BinaryRandom`], whose per-sample 0/1 draws come from the
/// injected generator and ignore the frequency entirely. The frequency is
/// still validated for every kind: a spec with `frequency <= 0` is rejected
/// rather than silently accepted.
///
/// # Errors
/// * [`SignalError::InvalidFrequency`] if `frequency` is not strictly
///   positive and finite.
/// * [`SignalError::InvalidParameter`] if `amplitude` is negative or not
///   finite, or `offset` is not finite.
pub fn synthesize(
    spec: &SignalSpec,
    timebase: &TimeBase,
    rng: &mut Pcg32,
) -> SignalResult<Vec<f64>> {
    if !spec.frequency.is_finite() || spec.frequency <= 0.0 {
        return Err(SignalError::InvalidFrequency {
            freq: spec.frequency,
        });
    }
    if !spec.amplitude.is_finite() || spec.amplitude < 0.0 {
        return Err(SignalError::invalid_param(
            "amplitude",
            format!("must be finite and >= 0, got {}", spec.amplitude),
        ));
    }
    if !spec.offset.is_finite() {
        return Err(SignalError::invalid_param(
            "offset",
            format!("must be finite, got {}", spec.offset),
        ));
    }

    let amplitude = spec.amplitude;
    let offset = spec.offset;
    let omega = TWO_PI * spec.frequency;
    let t = timebase.samples();

    let output = match spec.kind {
        // The carrier shares the sine formula; it is a separate identity
        // because of its role, not its shape.
        SignalKind::Sine | SignalKind::Carrier => t
            .iter()
            .map(|&t| amplitude * oscillator::sine(omega * t) + offset)
            .collect(),
        SignalKind::Square => t
            .iter()
            .map(|&t| amplitude * oscillator::square(omega * t, 0.5) + offset)
            .collect(),
        // Same 50% duty square as above, kept as its own arm so the identity
        // stays visible at the dispatch site.
        SignalKind::ClockPulse => t
            .iter()
            .map(|&t| amplitude * oscillator::square(omega * t, 0.5) + offset)
            .collect(),
        SignalKind::Triangle => t
            .iter()
            .map(|&t| amplitude * oscillator::triangle(omega * t) + offset)
            .collect(),
        SignalKind::BinaryRandom => (0..timebase.len())
            .map(|_| {
                let bit = if rng.gen::<f64>() > 0.5 { 1.0 } else { 0.0 };
                amplitude * bit + offset
            })
            .collect(),
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use wavescope_spec::SignalKind::*;

    fn tb() -> TimeBase {
        TimeBase::linspace(0.0, 1.0, 1001).unwrap()
    }

    #[test]
    fn test_output_length_matches_time_base_for_every_kind() {
        let tb = tb();
        for kind in [Sine, Square, Triangle, ClockPulse, BinaryRandom, Carrier] {
            let mut rng = create_rng(42);
            let spec = SignalSpec::new(kind, 1.0, 2.0, 0.0);
            let samples = synthesize(&spec, &tb, &mut rng).unwrap();
            assert_eq!(samples.len(), tb.len(), "kind {}", kind);
        }
    }

    #[test]
    fn test_sine_known_points() {
        // A=1, f=1 over [0,1]: zero at t=0, peak A at t=1/4.
        let tb = tb();
        let mut rng = create_rng(42);
        let spec = SignalSpec::new(Sine, 1.0, 1.0, 0.0);
        let samples = synthesize(&spec, &tb, &mut rng).unwrap();

        assert!(samples[0].abs() < 1e-12);
        assert!((samples[250] - 1.0).abs() < 1e-9); // t = 0.25
        assert!((samples[750] + 1.0).abs() < 1e-9); // t = 0.75
    }

    #[test]
    fn test_carrier_matches_sine() {
        let tb = tb();
        let sine = synthesize(
            &SignalSpec::new(Sine, 1.5, 3.0, 0.25),
            &tb,
            &mut create_rng(1),
        )
        .unwrap();
        let carrier = synthesize(
            &SignalSpec::new(Carrier, 1.5, 3.0, 0.25),
            &tb,
            &mut create_rng(1),
        )
        .unwrap();
        assert_eq!(sine, carrier);
    }

    #[test]
    fn test_clock_pulse_matches_square() {
        let tb = tb();
        let square = synthesize(
            &SignalSpec::new(Square, 1.0, 2.0, 0.0),
            &tb,
            &mut create_rng(1),
        )
        .unwrap();
        let clock = synthesize(
            &SignalSpec::new(ClockPulse, 1.0, 2.0, 0.0),
            &tb,
            &mut create_rng(1),
        )
        .unwrap();
        assert_eq!(square, clock);
    }

    #[test]
    fn test_amplitude_and_offset_applied() {
        let tb = tb();
        let mut rng = create_rng(42);
        let spec = SignalSpec::new(Square, 2.0, 1.0, 0.5);
        let samples = synthesize(&spec, &tb, &mut rng).unwrap();
        // Square is ±1, so samples are 2.5 or -1.5.
        for &s in &samples {
            assert!(s == 2.5 || s == -1.5, "unexpected sample {}", s);
        }
    }

    #[test]
    fn test_zero_amplitude_is_offset_only() {
        let tb = tb();
        let mut rng = create_rng(42);
        let spec = SignalSpec::new(Triangle, 0.0, 5.0, -0.75);
        let samples = synthesize(&spec, &tb, &mut rng).unwrap();
        assert!(samples.iter().all(|&s| s == -0.75));
    }

    #[test]
    fn test_binary_random_draws_zeros_and_ones() {
        let tb = TimeBase::linspace(0.0, 1.0, 2000).unwrap();
        let mut rng = create_rng(42);
        let spec = SignalSpec::new(BinaryRandom, 1.0, 1.0, 0.0);
        let samples = synthesize(&spec, &tb, &mut rng).unwrap();

        assert!(samples.iter().all(|&s| s == 0.0 || s == 1.0));
        let ones = samples.iter().filter(|&&s| s == 1.0).count();
        // Bernoulli(0.5) over 2000 draws should land well inside this band.
        assert!((600..1400).contains(&ones), "ones = {}", ones);
    }

    #[test]
    fn test_binary_random_is_seed_deterministic() {
        let tb = tb();
        let spec = SignalSpec::new(BinaryRandom, 1.0, 1.0, 0.0);

        let a = synthesize(&spec, &tb, &mut create_rng(42)).unwrap();
        let b = synthesize(&spec, &tb, &mut create_rng(42)).unwrap();
        let c = synthesize(&spec, &tb, &mut create_rng(43)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_binary_random_ignores_frequency() {
        let tb = tb();
        let fast = synthesize(
            &SignalSpec::new(BinaryRandom, 1.0, 50.0, 0.0),
            &tb,
            &mut create_rng(42),
        )
        .unwrap();
        let slow = synthesize(
            &SignalSpec::new(BinaryRandom, 1.0, 0.1, 0.0),
            &tb,
            &mut create_rng(42),
        )
        .unwrap();
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let tb = tb();
        let mut rng = create_rng(42);

        let zero_freq = SignalSpec::new(Sine, 1.0, 0.0, 0.0);
        assert!(matches!(
            synthesize(&zero_freq, &tb, &mut rng),
            Err(SignalError::InvalidFrequency { .. })
        ));

        let negative_freq = SignalSpec::new(Sine, 1.0, -3.0, 0.0);
        assert!(synthesize(&negative_freq, &tb, &mut rng).is_err());

        let negative_amp = SignalSpec::new(Sine, -1.0, 1.0, 0.0);
        assert!(matches!(
            synthesize(&negative_amp, &tb, &mut rng),
            Err(SignalError::InvalidParameter { .. })
        ));

        let nan_offset = SignalSpec::new(Sine, 1.0, 1.0, f64::NAN);
        assert!(synthesize(&nan_offset, &tb, &mut rng).is_err());
    }
}
