//! Elementary signal kinds and synthesis parameters.

use serde::{Deserialize, Serialize};

/// Elementary waveform kinds the synthesizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Sine wave.
    Sine,
    /// Square wave (50% duty).
    Square,
    /// Symmetric triangle wave.
    Triangle,
    /// Clock pulse train. Functionally a 50% duty square wave, kept as a
    /// distinct identity because it plays a distinct role in a scene.
    ClockPulse,
    /// Independent per-sample 0/1 draws. Stochastic; every evaluation with a
    /// different RNG state yields a different realization.
    BinaryRandom,
    /// Carrier wave. Same formula as `Sine`; distinct because it is the
    /// waveform being modulated onto rather than the message itself.
    Carrier,
}

impl SignalKind {
    /// Returns the signal kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Sine => "sine",
            SignalKind::Square => "square",
            SignalKind::Triangle => "triangle",
            SignalKind::ClockPulse => "clock_pulse",
            SignalKind::BinaryRandom => "binary_random",
            SignalKind::Carrier => "carrier",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters that fully determine an elementary waveform over a time base
/// (up to the RNG realization for [`SignalKind::BinaryRandom`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalSpec {
    /// Waveform kind.
    pub kind: SignalKind,
    /// Peak amplitude in volts. Must be non-negative.
    pub amplitude: f64,
    /// Frequency in Hz. Must be strictly positive.
    pub frequency: f64,
    /// DC offset in volts.
    pub offset: f64,
}

impl SignalSpec {
    /// Creates a new signal spec.
    pub fn new(kind: SignalKind, amplitude: f64, frequency: f64, offset: f64) -> Self {
        Self {
            kind,
            amplitude,
            frequency,
            offset,
        }
    }

    /// The canonical message signal: a 1 Hz unit-amplitude sine with no offset.
    ///
    /// Every modulated and demodulated channel is evaluated against this
    /// message, regardless of the channel's own slider values.
    pub fn canonical_message() -> Self {
        Self::new(SignalKind::Sine, 1.0, 1.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&SignalKind::BinaryRandom).unwrap();
        assert_eq!(json, "\"binary_random\"");

        let kind: SignalKind = serde_json::from_str("\"clock_pulse\"").unwrap();
        assert_eq!(kind, SignalKind::ClockPulse);
    }

    #[test]
    fn test_canonical_message() {
        let spec = SignalSpec::canonical_message();
        assert_eq!(spec.kind, SignalKind::Sine);
        assert_eq!(spec.amplitude, 1.0);
        assert_eq!(spec.frequency, 1.0);
        assert_eq!(spec.offset, 0.0);
    }
}
