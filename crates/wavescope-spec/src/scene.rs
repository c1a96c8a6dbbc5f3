//! Top-level scene document.

use serde::{Deserialize, Serialize};

use crate::channel::ChannelRequest;
use crate::error::SceneError;

/// Default carrier frequency in Hz.
pub const DEFAULT_CARRIER_FREQUENCY: f64 = 10.0;

/// The time window every channel is evaluated over.
///
/// Samples are evenly spaced and include both endpoints, so the default
/// window is 10 000 instants across `[0, 10]` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeWindow {
    /// Start time in seconds.
    #[serde(default)]
    pub start: f64,
    /// End time in seconds. Must be greater than `start`.
    #[serde(default = "default_end")]
    pub end: f64,
    /// Number of sample instants. Must be at least 2.
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_end() -> f64 {
    10.0
}

fn default_samples() -> usize {
    10_000
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: default_end(),
            samples: default_samples(),
        }
    }
}

/// A wavescope scene: shared time base parameters, the global carrier
/// frequency, a deterministic seed, and the channel list.
///
/// Nothing in a scene is stateful. Every evaluation pass recomputes all
/// traces from these parameters; the only non-determinism is binary random
/// data, which is pinned by `seed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Optional human-readable scene name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base RNG seed for stochastic signals.
    #[serde(default)]
    pub seed: u32,
    /// Shared time window.
    #[serde(default)]
    pub time: TimeWindow,
    /// Global carrier frequency in Hz, shared by every channel.
    #[serde(default = "default_carrier_frequency")]
    pub carrier_frequency: f64,
    /// Channel requests, evaluated independently.
    pub channels: Vec<ChannelRequest>,
}

fn default_carrier_frequency() -> f64 {
    DEFAULT_CARRIER_FREQUENCY
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            name: None,
            seed: 0,
            time: TimeWindow::default(),
            carrier_frequency: DEFAULT_CARRIER_FREQUENCY,
            channels: Vec::new(),
        }
    }
}

impl Scene {
    /// Parses a scene from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the scene to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
