//! Wavescope Scene Library
//!
//! This crate provides the types, identity resolution, and validation for
//! wavescope scenes. Scenes are JSON documents that describe a multi-channel
//! modulation display: a shared time window, a global carrier frequency, a
//! deterministic seed, and a list of channel requests.
//!
//! # Overview
//!
//! A scene contains:
//!
//! - **Time window**: start/end seconds and sample count for the shared time base
//! - **Carrier frequency**: the global carrier in Hz, shared by every channel
//! - **Seed**: base seed for any stochastic signal (binary random data)
//! - **Channels**: per-channel signal identity plus amplitude/frequency/offset
//!   and modulation index controls
//!
//! # Identity resolution
//!
//! Channel identities are written as display strings ("Message Signal",
//! "AM Modulated", "FSK Demodulated", ...) and resolved into the closed
//! [`SignalIdentity`] enumeration once, at deserialization time. The
//! resolution order is fixed and documented on [`SignalIdentity::resolve`];
//! an unrecognized string degrades to [`SignalIdentity::Unrecognized`]
//! rather than failing the whole scene.
//!
//! # Example
//!
//! ```
//! use wavescope_spec::{Scene, SignalIdentity, ModulationScheme};
//! use wavescope_spec::validation::validate_scene;
//!
//! let json = r#"{
//!     "name": "am-demo",
//!     "seed": 42,
//!     "carrier_frequency": 10.0,
//!     "channels": [
//!         { "identity": "AM Modulated", "modulation_index": 1.0 }
//!     ]
//! }"#;
//!
//! let scene = Scene::from_json(json).unwrap();
//! assert_eq!(
//!     scene.channels[0].identity,
//!     SignalIdentity::Modulated(ModulationScheme::Am)
//! );
//! assert!(validate_scene(&scene).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`channel`]: Channel requests, modulation schemes, and signal identities
//! - [`error`]: Error and warning types for validation
//! - [`scene`]: Top-level scene document and time window
//! - [`signal`]: Elementary signal kinds and synthesis parameters
//! - [`validation`]: Scene validation functions

pub mod channel;
pub mod error;
pub mod scene;
pub mod signal;
pub mod validation;

// Re-export commonly used types at the crate root
pub use channel::{ChannelRequest, ModulationScheme, SignalIdentity};
pub use error::{
    ErrorCode, SceneError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use scene::{Scene, TimeWindow, DEFAULT_CARRIER_FREQUENCY};
pub use signal::{SignalKind, SignalSpec};
pub use validation::validate_scene;
