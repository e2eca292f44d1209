//! Hardware-derived seeding.
//!
//! Each host opens the animation at its own phase: a seed is derived from
//! stable hardware identity (architecture, OS, hostname), and a PCG stream
//! seeded from it picks the starting frame index. The seed is resolved once
//! at startup and passed around as plain data; the frame generator itself
//! never sees an RNG.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::collections::hash_map::DefaultHasher;
use std::env;
use std::hash::{Hash, Hasher};

/// Mixing constant for seed derivation (2^64 / golden ratio).
const MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Starting frame indices are drawn from one full period of the helix
/// (phase step 0.2 gives a period of about 31.4 frames).
const PHASE_RANGE: u64 = 32;

/// Derive a seed from stable hardware identity.
///
/// Uses the architecture, OS family, and hostname, so the same machine gets
/// the same seed across runs. Missing identity sources degrade to fewer hash
/// inputs rather than failing.
#[must_use]
pub fn hardware_seed() -> u64 {
    let hostname = env::var("HOSTNAME")
        .or_else(|_| env::var("COMPUTERNAME"))
        .unwrap_or_default();
    identity_seed(env::consts::ARCH, env::consts::OS, &hostname)
}

/// Seed for an explicit identity triple. Split out for determinism tests.
#[must_use]
pub fn identity_seed(arch: &str, os: &str, hostname: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    arch.hash(&mut hasher);
    os.hash(&mut hasher);
    hostname.hash(&mut hasher);
    hasher.finish().wrapping_mul(MIX)
}

/// Pick the starting frame index for a seed.
///
/// Deterministic: the same seed always yields the same starting phase.
#[must_use]
pub fn starting_frame(seed: u64) -> u64 {
    let mut rng = Pcg64::seed_from_u64(seed);
    rng.gen_range(0..PHASE_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_seed_deterministic() {
        let a = identity_seed("x86_64", "linux", "helios");
        let b = identity_seed("x86_64", "linux", "helios");
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_seed_varies_by_host() {
        let a = identity_seed("x86_64", "linux", "helios");
        let b = identity_seed("x86_64", "linux", "selene");
        assert_ne!(a, b);
    }

    #[test]
    fn test_starting_frame_deterministic() {
        assert_eq!(starting_frame(42), starting_frame(42));
    }

    #[test]
    fn test_starting_frame_in_range() {
        for seed in 0..100 {
            assert!(starting_frame(seed) < PHASE_RANGE);
        }
    }

    #[test]
    fn test_hardware_seed_stable_within_process() {
        assert_eq!(hardware_seed(), hardware_seed());
    }
}
