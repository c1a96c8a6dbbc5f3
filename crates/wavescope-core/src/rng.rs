//! Deterministic RNG for stochastic signals.
//!
//! Binary random data is the only non-deterministic signal in a scene, and
//! its randomness is injected explicitly: every synthesis call receives a
//! PCG32 generator, and hosts derive independent per-channel (and, for live
//! display, per-tick) seeds from the scene's base seed with BLAKE3. Two
//! evaluation passes over the same scene therefore produce identical traces.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 generator from a 32-bit seed.
///
/// The seed is duplicated into both halves of the 64-bit state PCG32 wants.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for one channel of a scene.
///
/// Hashes a domain tag, the base seed, and the channel index with BLAKE3 so
/// channels never share a random stream even when their requests are
/// identical.
pub fn derive_channel_seed(base_seed: u32, channel_index: u32) -> u32 {
    derive_seed("channel", base_seed, channel_index)
}

/// Derives an independent seed for one display tick.
///
/// Live (Running) display re-evaluates the whole scene every tick; deriving
/// the tick seed from (base seed, tick) keeps each tick's random stream
/// distinct yet reproducible. No channel identity reaches the binary random
/// generator today, so this only changes output once a stochastic identity
/// exists.
pub fn derive_tick_seed(base_seed: u32, tick: u64) -> u32 {
    let mut input = Vec::with_capacity(16);
    input.extend_from_slice(b"tick");
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&tick.to_le_bytes());
    truncate_hash(&input)
}

/// Convenience: derives the channel seed and builds the generator.
pub fn channel_rng(base_seed: u32, channel_index: u32) -> Pcg32 {
    create_rng(derive_channel_seed(base_seed, channel_index))
}

fn derive_seed(tag: &str, base_seed: u32, index: u32) -> u32 {
    let mut input = Vec::with_capacity(tag.len() + 8);
    input.extend_from_slice(tag.as_bytes());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&index.to_le_bytes());
    truncate_hash(&input)
}

fn truncate_hash(input: &[u8]) -> u32 {
    let hash = blake3::hash(input);
    let b = hash.as_bytes();
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}
