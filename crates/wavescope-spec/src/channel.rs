//! Channel requests, modulation schemes, and signal identity resolution.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Modulation schemes supported by the modulator and demodulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModulationScheme {
    /// Amplitude modulation.
    Am,
    /// Frequency modulation.
    Fm,
    /// Phase modulation.
    Pm,
    /// Amplitude-shift keying.
    Ask,
    /// Phase-shift keying.
    Psk,
    /// Frequency-shift keying.
    Fsk,
}

impl ModulationScheme {
    /// Returns the display abbreviation used in identity strings ("AM", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ModulationScheme::Am => "AM",
            ModulationScheme::Fm => "FM",
            ModulationScheme::Pm => "PM",
            ModulationScheme::Ask => "ASK",
            ModulationScheme::Psk => "PSK",
            ModulationScheme::Fsk => "FSK",
        }
    }

    /// Parses a display abbreviation.
    pub fn from_abbreviation(s: &str) -> Option<Self> {
        match s {
            "AM" => Some(ModulationScheme::Am),
            "FM" => Some(ModulationScheme::Fm),
            "PM" => Some(ModulationScheme::Pm),
            "ASK" => Some(ModulationScheme::Ask),
            "PSK" => Some(ModulationScheme::Psk),
            "FSK" => Some(ModulationScheme::Fsk),
            _ => None,
        }
    }

    /// Returns all schemes, in display order.
    pub fn all() -> &'static [ModulationScheme] {
        &[
            ModulationScheme::Am,
            ModulationScheme::Fm,
            ModulationScheme::Pm,
            ModulationScheme::Ask,
            ModulationScheme::Psk,
            ModulationScheme::Fsk,
        ]
    }

    /// Whether the modulation index actually affects this scheme.
    ///
    /// The index scales AM depth and FM/PM deviation; the keying schemes
    /// ignore it entirely.
    pub fn uses_modulation_index(&self) -> bool {
        matches!(
            self,
            ModulationScheme::Am | ModulationScheme::Fm | ModulationScheme::Pm
        )
    }
}

impl std::fmt::Display for ModulationScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a channel asks to display.
///
/// Identities are resolved once, from the display string, when a request is
/// constructed or deserialized. Evaluation dispatches on this enum and never
/// re-parses the string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SignalIdentity {
    /// The raw message signal, synthesized with the channel's own controls.
    Message,
    /// A clock pulse train with the channel's own controls.
    ClockPulse,
    /// The carrier wave. Uses the scene's global carrier frequency, not the
    /// channel's frequency control.
    Carrier,
    /// The canonical message modulated under a scheme.
    Modulated(ModulationScheme),
    /// A freshly modulated signal passed through the matching demodulator.
    Demodulated(ModulationScheme),
    /// Anything that did not resolve. Evaluates to an all-zero trace so one
    /// bad channel never takes the rest of the display down.
    Unrecognized(String),
}

impl SignalIdentity {
    /// Resolves a display string into an identity.
    ///
    /// Matching is by case-sensitive substring, in a fixed priority order:
    ///
    /// 1. contains `"Message Signal"`
    /// 2. contains `"Clock Pulse"`
    /// 3. contains `"Carrier Wave"`
    /// 4. contains `"Modulated"` (scheme taken from the first word)
    /// 5. contains `"Demodulated"` (scheme taken from the first word)
    /// 6. anything else is `Unrecognized`
    ///
    /// The order matters: a string containing both "Carrier Wave" and
    /// "Modulated" resolves as the carrier. Note that step 4 never captures
    /// "AM Demodulated" and friends because the match is case-sensitive and
    /// "Demodulated" does not contain "Modulated" with a capital M.
    /// A "Modulated"/"Demodulated" string whose first word is not a known
    /// scheme also falls through to `Unrecognized`.
    pub fn resolve(label: &str) -> Self {
        if label.contains("Message Signal") {
            SignalIdentity::Message
        } else if label.contains("Clock Pulse") {
            SignalIdentity::ClockPulse
        } else if label.contains("Carrier Wave") {
            SignalIdentity::Carrier
        } else if label.contains("Modulated") {
            match Self::leading_scheme(label) {
                Some(scheme) => SignalIdentity::Modulated(scheme),
                None => SignalIdentity::Unrecognized(label.to_string()),
            }
        } else if label.contains("Demodulated") {
            match Self::leading_scheme(label) {
                Some(scheme) => SignalIdentity::Demodulated(scheme),
                None => SignalIdentity::Unrecognized(label.to_string()),
            }
        } else {
            SignalIdentity::Unrecognized(label.to_string())
        }
    }

    fn leading_scheme(label: &str) -> Option<ModulationScheme> {
        label
            .split_whitespace()
            .next()
            .and_then(ModulationScheme::from_abbreviation)
    }

    /// Returns the canonical display string for this identity.
    pub fn label(&self) -> String {
        match self {
            SignalIdentity::Message => "Message Signal".to_string(),
            SignalIdentity::ClockPulse => "Clock Pulse".to_string(),
            SignalIdentity::Carrier => "Carrier Wave".to_string(),
            SignalIdentity::Modulated(scheme) => format!("{} Modulated", scheme),
            SignalIdentity::Demodulated(scheme) => format!("{} Demodulated", scheme),
            SignalIdentity::Unrecognized(label) => label.clone(),
        }
    }

    /// The scheme this identity modulates or demodulates under, if any.
    pub fn scheme(&self) -> Option<ModulationScheme> {
        match self {
            SignalIdentity::Modulated(scheme) | SignalIdentity::Demodulated(scheme) => {
                Some(*scheme)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for SignalIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Identities travel through scene JSON as their display strings, so
// resolution happens exactly once, inside deserialization.
impl Serialize for SignalIdentity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for SignalIdentity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        if label.trim().is_empty() {
            return Err(D::Error::custom("identity string must not be empty"));
        }
        Ok(SignalIdentity::resolve(&label))
    }
}

/// One channel of the display: an identity plus the front-panel controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelRequest {
    /// Whether the trace is visible. Disabled channels are still evaluated.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// What to display, as a resolved identity.
    pub identity: SignalIdentity,
    /// Amplitude control in volts.
    #[serde(default = "default_unit")]
    pub amplitude: f64,
    /// Frequency control in Hz. Ignored by carrier and (de)modulated
    /// identities, which use the scene's carrier frequency.
    #[serde(default = "default_unit")]
    pub frequency: f64,
    /// Offset control in volts.
    #[serde(default)]
    pub offset: f64,
    /// Modulation index. Only meaningful for AM/FM/PM identities.
    #[serde(default = "default_unit")]
    pub modulation_index: f64,
}

fn default_enabled() -> bool {
    true
}

fn default_unit() -> f64 {
    1.0
}

impl ChannelRequest {
    /// Creates a request with default controls for the given identity.
    pub fn new(identity: SignalIdentity) -> Self {
        Self {
            enabled: true,
            identity,
            amplitude: 1.0,
            frequency: 1.0,
            offset: 0.0,
            modulation_index: 1.0,
        }
    }
}
