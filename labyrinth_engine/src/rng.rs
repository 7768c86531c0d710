//! Deterministic pseudo-random rolls.
//!
//! Events and traps are keyed off the player's step counter, so a given
//! sequence of moves always replays the same way. Nothing here is suitable
//! for anything that needs real randomness.

use log::debug;

/// Returns a value in `[0, modulo)` derived from `seed` by the classic
/// `fract(sin(x) * 43758.5453)` shader hash.
///
/// `modulo` must be at least 1. A zero modulo is treated as 1 in release builds.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pseudo_random(seed: usize, modulo: usize) -> usize {
    debug_assert!(modulo > 0, "pseudo_random called with modulo 0");
    let modulo = modulo.max(1);
    let v = (seed as f64 * 12.9898).sin() * 43758.5453;
    let fraction = v - v.floor();
    let roll = ((fraction * modulo as f64).floor() as usize).min(modulo - 1);
    debug!("pseudo_random(seed={seed}, modulo={modulo}) -> {roll}");
    roll
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_in_range() {
        for modulo in 1..=12 {
            for seed in 0..500 {
                assert!(pseudo_random(seed, modulo) < modulo);
            }
        }
    }

    #[test]
    fn rolls_are_deterministic() {
        for seed in 0..100 {
            assert_eq!(pseudo_random(seed, 10), pseudo_random(seed, 10));
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(pseudo_random(0, 10), 0);
        assert_eq!(pseudo_random(1, 10), 9);
        assert_eq!(pseudo_random(2, 10), 0);
        assert_eq!(pseudo_random(3, 3), 1);
        assert_eq!(pseudo_random(7, 10), 1);
        assert_eq!(pseudo_random(1, 3), 2);
    }

    #[test]
    fn modulo_one_always_zero() {
        assert!((0..50).all(|seed| pseudo_random(seed, 1) == 0));
    }

    #[test]
    fn large_seeds_stay_in_range() {
        for seed in [usize::from(u16::MAX), 1 << 20, 123_456_789] {
            assert!(pseudo_random(seed, 7) < 7);
        }
    }
}
