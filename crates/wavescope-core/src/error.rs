//! Error types for the signal engine.

use thiserror::Error;

/// Result type for signal operations.
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors that can occur during synthesis, modulation, or channel evaluation.
///
/// Unrecognized identities are not errors: they degrade to all-zero traces so
/// one bad channel never stops the rest of a pass. Errors are reserved for
/// parameters the engine must not silently accept.
#[derive(Debug, Error)]
pub enum SignalError {
    /// Frequency is zero, negative, or non-finite.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A waveform does not line up with the time base it is evaluated over.
    #[error("waveform length {found} does not match time base length {expected}")]
    LengthMismatch {
        /// Expected number of samples (the time base length).
        expected: usize,
        /// Actual number of samples.
        found: usize,
    },

    /// Invalid time base construction.
    #[error("invalid time base: {message}")]
    InvalidTimeBase {
        /// Error message.
        message: String,
    },
}

impl SignalError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid time base error.
    pub fn time_base(message: impl Into<String>) -> Self {
        Self::InvalidTimeBase {
            message: message.into(),
        }
    }
}
