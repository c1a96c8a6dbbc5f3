//! Per-channel evaluation: resolving a request into a displayable trace.

use rand_pcg::Pcg32;

use wavescope_spec::{ChannelRequest, SignalIdentity, SignalKind, SignalSpec};

use crate::demodulation::demodulate;
use crate::error::SignalResult;
use crate::modulation::modulate;
use crate::synthesis::synthesize;
use crate::timebase::TimeBase;

/// One evaluated channel, ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTrace {
    /// Display name, the identity's canonical label.
    pub name: String,
    /// One sample per time base instant.
    pub samples: Vec<f64>,
    /// Whether the host should draw this trace.
    pub visible: bool,
}

/// Evaluates one channel request into a trace.
///
/// Dispatch follows the identity resolved when the request was built:
///
/// - `Message` / `ClockPulse`: synthesized with the channel's own
///   amplitude/frequency/offset controls (the affine transform is baked into
///   synthesis, applied exactly once).
/// - `Carrier`: synthesized with the channel's amplitude and offset but the
///   scene's global `carrier_frequency`; the channel's frequency control is
///   ignored.
/// - `Modulated(scheme)`: the shared `message` waveform modulated onto the
///   global carrier, then `amplitude·x + offset` applied as post-processing.
/// - `Demodulated(scheme)`: a freshly modulated signal (same parameters as
///   above, never a stored one) run through the matching demodulator, then
///   the same affine post-processing.
/// - `Unrecognized`: an all-zero trace of time base length. Never an error,
///   so one bad channel cannot take down an evaluation pass.
///
/// Disabled channels are still evaluated; `visible` carries the flag out.
///
/// # Errors
/// Propagates synthesis/modulation parameter errors
/// ([`crate::SignalError`]); failures are per-channel and leave other
/// channels unaffected.
pub fn evaluate_channel(
    request: &ChannelRequest,
    timebase: &TimeBase,
    message: &[f64],
    carrier_frequency: f64,
    rng: &mut Pcg32,
) -> SignalResult<ChannelTrace> {
    let samples = match &request.identity {
        SignalIdentity::Message => synthesize(
            &SignalSpec::new(
                SignalKind::Sine,
                request.amplitude,
                request.frequency,
                request.offset,
            ),
            timebase,
            rng,
        )?,
        SignalIdentity::ClockPulse => synthesize(
            &SignalSpec::new(
                SignalKind::ClockPulse,
                request.amplitude,
                request.frequency,
                request.offset,
            ),
            timebase,
            rng,
        )?,
        SignalIdentity::Carrier => synthesize(
            &SignalSpec::new(
                SignalKind::Carrier,
                request.amplitude,
                carrier_frequency,
                request.offset,
            ),
            timebase,
            rng,
        )?,
        SignalIdentity::Modulated(scheme) => {
            let modulated = modulate(
                carrier_frequency,
                message,
                timebase,
                *scheme,
                request.modulation_index,
            )?;
            affine(modulated, request.amplitude, request.offset)
        }
        SignalIdentity::Demodulated(scheme) => {
            let modulated = modulate(
                carrier_frequency,
                message,
                timebase,
                *scheme,
                request.modulation_index,
            )?;
            affine(
                demodulate(&modulated, *scheme),
                request.amplitude,
                request.offset,
            )
        }
        SignalIdentity::Unrecognized(_) => vec![0.0; timebase.len()],
    };

    Ok(ChannelTrace {
        name: request.identity.label(),
        samples,
        visible: request.enabled,
    })
}

fn affine(mut samples: Vec<f64>, amplitude: f64, offset: f64) -> Vec<f64> {
    for sample in &mut samples {
        *sample = amplitude * *sample + offset;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use wavescope_spec::ModulationScheme;

    fn tb() -> TimeBase {
        TimeBase::linspace(0.0, 1.0, 1000).unwrap()
    }

    fn message(tb: &TimeBase) -> Vec<f64> {
        synthesize(&SignalSpec::canonical_message(), tb, &mut create_rng(0)).unwrap()
    }

    fn request(label: &str) -> ChannelRequest {
        ChannelRequest::new(SignalIdentity::resolve(label))
    }

    #[test]
    fn test_message_uses_request_controls() {
        let tb = tb();
        let msg = message(&tb);
        let mut req = request("Message Signal");
        req.amplitude = 2.0;
        req.offset = 1.0;

        let trace = evaluate_channel(&req, &tb, &msg, 10.0, &mut create_rng(0)).unwrap();
        let direct = synthesize(
            &SignalSpec::new(SignalKind::Sine, 2.0, 1.0, 1.0),
            &tb,
            &mut create_rng(0),
        )
        .unwrap();
        assert_eq!(trace.samples, direct);
        assert_eq!(trace.name, "Message Signal");
        assert!(trace.visible);
    }

    #[test]
    fn test_carrier_uses_global_frequency() {
        let tb = tb();
        let msg = message(&tb);
        let mut req = request("Carrier Wave");
        req.frequency = 3.0; // must be ignored

        let trace = evaluate_channel(&req, &tb, &msg, 25.0, &mut create_rng(0)).unwrap();
        let direct = synthesize(
            &SignalSpec::new(SignalKind::Carrier, 1.0, 25.0, 0.0),
            &tb,
            &mut create_rng(0),
        )
        .unwrap();
        assert_eq!(trace.samples, direct);
    }

    #[test]
    fn test_modulated_applies_affine_after_modulation() {
        let tb = tb();
        let msg = message(&tb);
        let mut req = request("PM Modulated");
        req.amplitude = 0.5;
        req.offset = 1.0;

        let trace = evaluate_channel(&req, &tb, &msg, 10.0, &mut create_rng(0)).unwrap();
        let raw = modulate(10.0, &msg, &tb, ModulationScheme::Pm, 1.0).unwrap();
        for (out, r) in trace.samples.iter().zip(&raw) {
            assert_eq!(*out, 0.5 * r + 1.0);
        }
        assert_eq!(trace.name, "PM Modulated");
    }

    #[test]
    fn test_demodulated_remodulates_fresh() {
        let tb = tb();
        let msg = message(&tb);
        let mut req = request("ASK Demodulated");
        req.modulation_index = 2.0;

        let trace = evaluate_channel(&req, &tb, &msg, 10.0, &mut create_rng(0)).unwrap();
        let remodulated = modulate(10.0, &msg, &tb, ModulationScheme::Ask, 2.0).unwrap();
        let expected = demodulate(&remodulated, ModulationScheme::Ask);
        assert_eq!(trace.samples, expected);
    }

    #[test]
    fn test_unrecognized_identity_yields_zeros() {
        let tb = tb();
        let msg = message(&tb);
        let trace =
            evaluate_channel(&request("QAM Modulated"), &tb, &msg, 10.0, &mut create_rng(0))
                .unwrap();
        assert_eq!(trace.samples, vec![0.0; tb.len()]);
        assert_eq!(trace.name, "QAM Modulated");
    }

    #[test]
    fn test_disabled_channel_still_evaluates() {
        let tb = tb();
        let msg = message(&tb);
        let mut req = request("Clock Pulse");
        req.enabled = false;

        let trace = evaluate_channel(&req, &tb, &msg, 10.0, &mut create_rng(0)).unwrap();
        assert!(!trace.visible);
        assert_eq!(trace.samples.len(), tb.len());
    }

    #[test]
    fn test_bad_parameters_fail_only_this_channel() {
        let tb = tb();
        let msg = message(&tb);
        let mut bad = request("Message Signal");
        bad.frequency = 0.0;

        assert!(evaluate_channel(&bad, &tb, &msg, 10.0, &mut create_rng(0)).is_err());

        // A sibling channel with valid parameters is unaffected.
        let good = request("AM Modulated");
        assert!(evaluate_channel(&good, &tb, &msg, 10.0, &mut create_rng(0)).is_ok());
    }
}
