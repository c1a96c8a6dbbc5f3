//! Wavescope Signal Engine
//!
//! This crate is the numeric heart of wavescope: pure transforms that turn a
//! time base and a handful of parameters into sampled voltage sequences.
//!
//! # Overview
//!
//! The engine exposes four operations:
//!
//! - [`TimeBase::linspace`] - the shared, evenly spaced sample instants
//! - [`synthesize`] - elementary waveforms (sine, square, triangle, clock
//!   pulse, binary random, carrier) over a time base
//! - [`modulate`] / [`demodulate`] - classic analog and digital schemes
//!   (AM, FM, PM, ASK, PSK, FSK), with deliberately simple recovery
//! - [`evaluate_channel`] - resolves one channel request into a final trace,
//!   composing the above plus a final amplitude/offset transform
//!
//! # Determinism
//!
//! Everything is pure and synchronous: no state survives a call, channels
//! share only immutable inputs and may be evaluated in any order. The one
//! stochastic signal (binary random data) draws from an explicitly injected
//! PCG32 generator; see [`rng`] for seed derivation. Given the same scene
//! and seed, every pass produces identical traces.
//!
//! # Fidelity over correctness
//!
//! The demodulators are display estimators, not decoders. In particular the
//! FM/PM recovery uses a degenerate phase proxy (the signal as its own
//! imaginary part) that is kept on purpose; see [`demodulate`].
//!
//! # Example
//!
//! ```
//! use wavescope_core::{evaluate_channel, rng, synthesize, TimeBase};
//! use wavescope_spec::{ChannelRequest, SignalIdentity, SignalSpec};
//!
//! let timebase = TimeBase::linspace(0.0, 10.0, 10_000)?;
//! let message = synthesize(
//!     &SignalSpec::canonical_message(),
//!     &timebase,
//!     &mut rng::create_rng(42),
//! )?;
//!
//! let request = ChannelRequest::new(SignalIdentity::resolve("AM Modulated"));
//! let trace = evaluate_channel(&request, &timebase, &message, 10.0, &mut rng::create_rng(42))?;
//! assert_eq!(trace.samples.len(), 10_000);
//! # Ok::<(), wavescope_core::SignalError>(())
//! ```

pub mod channel;
pub mod demodulation;
pub mod error;
pub mod modulation;
pub mod oscillator;
pub mod rng;
pub mod synthesis;
pub mod timebase;

// Re-export main types at the crate root
pub use channel::{evaluate_channel, ChannelTrace};
pub use demodulation::demodulate;
pub use error::{SignalError, SignalResult};
pub use modulation::modulate;
pub use synthesis::synthesize;
pub use timebase::TimeBase;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use wavescope_spec::{ChannelRequest, ModulationScheme, SignalIdentity, SignalSpec};

    /// The full display pipeline: default window, 10 Hz carrier, unit-depth
    /// AM of the canonical 1 Hz message.
    #[test]
    fn test_am_display_scenario() {
        let timebase = TimeBase::linspace(0.0, 10.0, 10_000).unwrap();
        let message = synthesize(
            &SignalSpec::canonical_message(),
            &timebase,
            &mut rng::create_rng(42),
        )
        .unwrap();

        let request = ChannelRequest::new(SignalIdentity::resolve("AM Modulated"));
        let trace = evaluate_channel(
            &request,
            &timebase,
            &message,
            10.0,
            &mut rng::create_rng(42),
        )
        .unwrap();

        assert_eq!(trace.samples.len(), 10_000);
        assert!(trace.visible);
        // (1 + sin)·sin ranges over [-2, 2], and both factors vanish at t=0.
        assert!(trace.samples.iter().all(|&s| (-2.0..=2.0).contains(&s)));
        assert!(trace.samples[0].abs() < 1e-12);
    }

    /// Every identity produces a trace of time base length.
    #[test]
    fn test_every_identity_has_full_length() {
        let timebase = TimeBase::linspace(0.0, 2.0, 500).unwrap();
        let message = synthesize(
            &SignalSpec::canonical_message(),
            &timebase,
            &mut rng::create_rng(1),
        )
        .unwrap();

        let mut labels = vec![
            "Message Signal".to_string(),
            "Clock Pulse".to_string(),
            "Carrier Wave".to_string(),
            "Nonsense Identity".to_string(),
        ];
        for scheme in ModulationScheme::all() {
            labels.push(format!("{} Modulated", scheme));
            labels.push(format!("{} Demodulated", scheme));
        }

        for label in labels {
            let request = ChannelRequest::new(SignalIdentity::resolve(&label));
            let trace = evaluate_channel(
                &request,
                &timebase,
                &message,
                10.0,
                &mut rng::create_rng(1),
            )
            .unwrap();
            assert_eq!(trace.samples.len(), timebase.len(), "identity {}", label);
        }
    }

    /// PSK of a constant-sign message round-trips to the carrier's
    /// positivity indicator: the threshold sits exactly at zero, so samples
    /// where the carrier is zero or negative emit 0.
    #[test]
    fn test_psk_round_trip_on_positive_message() {
        let timebase = TimeBase::linspace(0.0, 1.0, 1000).unwrap();
        let all_positive = vec![1.0; timebase.len()];

        let modulated =
            modulate(8.0, &all_positive, &timebase, ModulationScheme::Psk, 1.0).unwrap();
        let recovered = demodulate(&modulated, ModulationScheme::Psk);

        for (i, (&r, &m)) in recovered.iter().zip(&modulated).enumerate() {
            let expected = if m > 0.0 { 1.0 } else { 0.0 };
            assert_eq!(r, expected, "sample {}", i);
        }
        // The carrier is positive somewhere, so the recovery is not all zero.
        assert!(recovered.iter().any(|&r| r == 1.0));
    }

    /// Demodulation always follows a fresh modulation of the same message;
    /// comparing two passes confirms nothing is cached between them.
    #[test]
    fn test_passes_are_reproducible() {
        let timebase = TimeBase::linspace(0.0, 10.0, 2_000).unwrap();
        let message = synthesize(
            &SignalSpec::canonical_message(),
            &timebase,
            &mut rng::create_rng(9),
        )
        .unwrap();
        let request = ChannelRequest::new(SignalIdentity::resolve("FM Demodulated"));

        let first = evaluate_channel(
            &request,
            &timebase,
            &message,
            10.0,
            &mut rng::create_rng(9),
        )
        .unwrap();
        let second = evaluate_channel(
            &request,
            &timebase,
            &message,
            10.0,
            &mut rng::create_rng(9),
        )
        .unwrap();
        assert_eq!(first, second);
    }
}
