//! Command implementations for the wavescope CLI.

pub mod render;
pub mod scope;
pub mod validate;
