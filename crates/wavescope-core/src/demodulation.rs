//! Approximate demodulation for display.
//!
//! These recoveries are intentionally simplified: no filtering stage, no
//! carrier tracking. They produce a recognizable but rough estimate of the
//! message for visual comparison, not a faithful decoder.

use std::f64::consts::PI;

use wavescope_spec::ModulationScheme;

use crate::oscillator::TWO_PI;

/// ASK decision threshold. A sample exactly at the threshold classifies as 0.
const ASK_THRESHOLD: f64 = 0.1;

/// Recovers an approximate message estimate from a modulated waveform.
///
/// Per scheme:
///
/// - **AM**: rectified envelope `|s|` with no low-pass stage, so the carrier
///   ripple stays visible.
/// - **FM/PM**: instantaneous-phase estimate
///   `gradient(unwrap(atan2(s, s)))`. Treating the real signal as its own
///   imaginary part is a degenerate stand-in for an analytic signal, not a
///   Hilbert transform; it collapses the phase to ±π/4-family values and the
///   derivative to spikes at zero crossings. It is kept because it is
///   exactly the estimate the display is defined to show.
/// - **ASK**: strict threshold `s > 0.1`, emitted as 0/1.
/// - **PSK/FSK**: strict threshold `s > 0`, emitted as 0/1.
///
/// Infallible; the output always has the input's length.
pub fn demodulate(modulated: &[f64], scheme: ModulationScheme) -> Vec<f64> {
    match scheme {
        ModulationScheme::Am => modulated.iter().map(|&s| s.abs()).collect(),
        ModulationScheme::Fm | ModulationScheme::Pm => {
            let phase: Vec<f64> = modulated.iter().map(|&s| s.atan2(s)).collect();
            gradient(&phase_unwrap(&phase))
        }
        ModulationScheme::Ask => modulated
            .iter()
            .map(|&s| if s > ASK_THRESHOLD { 1.0 } else { 0.0 })
            .collect(),
        ModulationScheme::Psk | ModulationScheme::Fsk => modulated
            .iter()
            .map(|&s| if s > 0.0 { 1.0 } else { 0.0 })
            .collect(),
    }
}

/// Unwraps a phase sequence by adding multiples of 2π wherever consecutive
/// samples jump by more than π.
///
/// Matches numpy's `unwrap` including its boundary rule: a jump of exactly
/// ±π is left alone, and a corrected positive jump maps to +π rather
/// than -π.
pub(crate) fn phase_unwrap(phase: &[f64]) -> Vec<f64> {
    let mut output = phase.to_vec();
    let mut correction = 0.0;

    for i in 1..phase.len() {
        let d = phase[i] - phase[i - 1];
        let mut wrapped = (d + PI).rem_euclid(TWO_PI) - PI;
        if wrapped == -PI && d > 0.0 {
            wrapped = PI;
        }
        let mut step = wrapped - d;
        if d.abs() < PI {
            step = 0.0;
        }
        correction += step;
        output[i] = phase[i] + correction;
    }

    output
}

/// Unit-spacing numerical gradient: one-sided differences at the ends,
/// central differences in the interior (numpy's `gradient` with the default
/// spacing of 1 sample).
///
/// Inputs with fewer than two samples have no usable difference; they map to
/// an all-zero output of the same length.
pub(crate) fn gradient(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut output = vec![0.0; n];
    output[0] = values[1] - values[0];
    output[n - 1] = values[n - 1] - values[n - 2];
    for i in 1..n - 1 {
        output[i] = (values[i + 1] - values[i - 1]) / 2.0;
    }
    output
}
