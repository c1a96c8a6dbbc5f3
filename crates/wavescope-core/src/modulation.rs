//! Carrier modulation under the six supported schemes.

use wavescope_spec::ModulationScheme;

use crate::error::{SignalError, SignalResult};
use crate::oscillator::TWO_PI;
use crate::timebase::TimeBase;

/// Modulates a message waveform onto a carrier.
///
/// The carrier is always `sin(2π·f_c·t)` over the time base. Per scheme:
///
/// - **AM**: `(1 + k·m) · carrier`. No clamping: with unit message amplitude
///   a depth above 1 overmodulates and the envelope goes negative. That is a
///   known, accepted artifact of the display.
/// - **FM**: the message is integrated by cumulative sum scaled by the time
///   step, then `sin(2π·f_c·t + k·∫m)`. The rectangle-rule integral is only
///   as accurate as the sample density; no correction is applied.
/// - **PM**: `sin(2π·f_c·t + k·m)`.
/// - **ASK**: `carrier · (0.5 + 0.5·[m > 0])` — the "off" state is half
///   amplitude, not silence.
/// - **FSK**: per-sample tone select, `sin(2π·1.5·f_c·t)` where `m > 0` and
///   the plain carrier elsewhere.
/// - **PSK**: `carrier · sign(m)`, 180° phase flips keyed by message sign
///   (`sign(0) = 0`).
///
/// The modulation index `k` only affects AM/FM/PM; the keying schemes ignore
/// it. Output length always equals the time base length.
///
/// # Errors
/// * [`SignalError::InvalidFrequency`] if `carrier_frequency` is not
///   strictly positive and finite.
/// * [`SignalError::InvalidParameter`] if `modulation_index` is negative or
///   not finite.
/// * [`SignalError::LengthMismatch`] if the message length differs from the
///   time base length.
pub fn modulate(
    carrier_frequency: f64,
    message: &[f64],
    timebase: &TimeBase,
    scheme: ModulationScheme,
    modulation_index: f64,
) -> SignalResult<Vec<f64>> {
    if !carrier_frequency.is_finite() || carrier_frequency <= 0.0 {
        return Err(SignalError::InvalidFrequency {
            freq: carrier_frequency,
        });
    }
    if !modulation_index.is_finite() || modulation_index < 0.0 {
        return Err(SignalError::invalid_param(
            "modulation_index",
            format!("must be finite and >= 0, got {}", modulation_index),
        ));
    }
    if message.len() != timebase.len() {
        return Err(SignalError::LengthMismatch {
            expected: timebase.len(),
            found: message.len(),
        });
    }

    let omega = TWO_PI * carrier_frequency;
    let k = modulation_index;
    let t = timebase.samples();

    let output = match scheme {
        ModulationScheme::Am => t
            .iter()
            .zip(message)
            .map(|(&t, &m)| (1.0 + k * m) * (omega * t).sin())
            .collect(),
        ModulationScheme::Fm => {
            let dt = timebase.step();
            let mut integral = 0.0;
            t.iter()
                .zip(message)
                .map(|(&t, &m)| {
                    integral += m * dt;
                    (omega * t + k * integral).sin()
                })
                .collect()
        }
        ModulationScheme::Pm => t
            .iter()
            .zip(message)
            .map(|(&t, &m)| (omega * t + k * m).sin())
            .collect(),
        ModulationScheme::Ask => t
            .iter()
            .zip(message)
            .map(|(&t, &m)| {
                let keying = if m > 0.0 { 1.0 } else { 0.5 };
                (omega * t).sin() * keying
            })
            .collect(),
        ModulationScheme::Fsk => t
            .iter()
            .zip(message)
            .map(|(&t, &m)| {
                if m > 0.0 {
                    (1.5 * omega * t).sin()
                } else {
                    (omega * t).sin()
                }
            })
            .collect(),
        ModulationScheme::Psk => t
            .iter()
            .zip(message)
            .map(|(&t, &m)| (omega * t).sin() * sign(m))
            .collect(),
    };

    Ok(output)
}

/// Sign with `sign(0) = 0`, the convention the PSK keying relies on.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
