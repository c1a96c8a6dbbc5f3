//! Scene validation logic.
//!
//! Validation is a pre-flight check for hosts: the core engine re-checks the
//! parameters it actually consumes and fails fast on its own, but a host that
//! validates first can report every problem at once, with stable codes and
//! JSON paths.

use crate::channel::{ChannelRequest, ModulationScheme, SignalIdentity};
use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::scene::Scene;

/// Minimum number of samples in a time window.
const MIN_SAMPLES: usize = 2;

/// Validates a scene and returns every error and warning found.
///
/// # Example
/// ```
/// use wavescope_spec::Scene;
/// use wavescope_spec::validation::validate_scene;
///
/// let scene = Scene::from_json(r#"{ "channels": [ { "identity": "Message Signal" } ] }"#).unwrap();
/// assert!(validate_scene(&scene).is_ok());
/// ```
pub fn validate_scene(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_time_window(scene, &mut result);
    validate_carrier(scene, &mut result);

    if scene.channels.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoChannels,
            "scene must declare at least one channel",
            "channels",
        ));
    }

    for (index, channel) in scene.channels.iter().enumerate() {
        validate_channel(index, channel, &mut result);
    }

    result
}

fn validate_time_window(scene: &Scene, result: &mut ValidationResult) {
    let window = &scene.time;

    if !window.start.is_finite() || !window.end.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonFiniteParameter,
            "time window bounds must be finite",
            "time",
        ));
        return;
    }

    if window.end <= window.start {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTimeWindow,
            format!(
                "time window end ({}) must be greater than start ({})",
                window.end, window.start
            ),
            "time.end",
        ));
    }

    if window.samples < MIN_SAMPLES {
        result.add_error(ValidationError::with_path(
            ErrorCode::TooFewSamples,
            format!(
                "time window needs at least {} samples, got {}",
                MIN_SAMPLES, window.samples
            ),
            "time.samples",
        ));
    }
}

fn validate_carrier(scene: &Scene, result: &mut ValidationResult) {
    if !scene.carrier_frequency.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonFiniteParameter,
            "carrier_frequency must be finite",
            "carrier_frequency",
        ));
    } else if scene.carrier_frequency <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonPositiveCarrierFrequency,
            format!(
                "carrier_frequency must be > 0 Hz, got {}",
                scene.carrier_frequency
            ),
            "carrier_frequency",
        ));
    }
}

fn validate_channel(index: usize, channel: &ChannelRequest, result: &mut ValidationResult) {
    let path = |field: &str| format!("channels[{}].{}", index, field);

    for (field, value) in [
        ("amplitude", channel.amplitude),
        ("frequency", channel.frequency),
        ("offset", channel.offset),
        ("modulation_index", channel.modulation_index),
    ] {
        if !value.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonFiniteParameter,
                format!("{} must be finite", field),
                path(field),
            ));
        }
    }

    if channel.frequency <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonPositiveFrequency,
            format!("frequency must be > 0 Hz, got {}", channel.frequency),
            path("frequency"),
        ));
    }

    if channel.amplitude < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NegativeAmplitude,
            format!("amplitude must be >= 0, got {}", channel.amplitude),
            path("amplitude"),
        ));
    }

    if channel.modulation_index < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NegativeModulationIndex,
            format!(
                "modulation_index must be >= 0, got {}",
                channel.modulation_index
            ),
            path("modulation_index"),
        ));
    }

    match &channel.identity {
        SignalIdentity::Unrecognized(label) => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::UnrecognizedIdentity,
                format!("identity '{}' is not recognized; the trace will be flat zero", label),
                path("identity"),
            ));
        }
        SignalIdentity::Modulated(scheme) | SignalIdentity::Demodulated(scheme) => {
            if !scheme.uses_modulation_index() && channel.modulation_index != 1.0 {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::ModulationIndexUnused,
                    format!("{} keying ignores the modulation index", scheme),
                    path("modulation_index"),
                ));
            }
            // The canonical message has unit amplitude, so depth > 1 means a
            // negative envelope. Permitted, but worth flagging.
            if *scheme == ModulationScheme::Am && channel.modulation_index > 1.0 {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::Overmodulation,
                    format!(
                        "AM depth {} exceeds 1.0 and will overmodulate",
                        channel.modulation_index
                    ),
                    path("modulation_index"),
                ));
            }
        }
        _ => {}
    }
}
