//! Wavescope CLI library.
//!
//! The binary in `main.rs` is a thin dispatcher; everything it calls lives
//! here so commands and helpers can be unit tested.

pub mod cli_args;
pub mod commands;
pub mod controller;
pub mod input;
pub mod trace;
