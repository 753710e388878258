// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Seeded Parameter Generator
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Deterministic (amplitude, frequency, phase) generation from a seed
//! string.
//!
//! The generator family is pinned: the seed string is hashed with
//! SHA-256 and the digest keys a `ChaCha8Rng`. Each uniform draw in
//! `[lo, hi)` is `lo + (hi - lo) * u` with `u` the 53-bit `f64` sample
//! from `rand`'s `Standard` distribution. Draws happen in a fixed order:
//! all amplitudes, then all frequencies, then all phases. Changing any
//! of these changes every downstream signature.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use sigkernel_types::ParameterSet;

/// Amplitude range `[0.5, 1.5)`.
pub const AMPLITUDE_RANGE: (f64, f64) = (0.5, 1.5);
/// Frequency range `[1.0, 5.0)`.
pub const FREQUENCY_RANGE: (f64, f64) = (1.0, 5.0);
/// Phase range `[0, 2π)`.
pub const PHASE_RANGE: (f64, f64) = (0.0, TAU);

/// Seeded uniform stream used for parameters and, after them, any
/// randomly drawn entropy values.
pub struct ParameterGenerator {
    rng: ChaCha8Rng,
}

impl ParameterGenerator {
    pub fn from_seed(seed: &str) -> Self {
        let digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
        Self {
            rng: ChaCha8Rng::from_seed(digest),
        }
    }

    /// Uniform in `[lo, hi)`.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let u: f64 = self.rng.gen();
        lo + (hi - lo) * u
    }

    fn draw(&mut self, k: usize, (lo, hi): (f64, f64)) -> Vec<f64> {
        (0..k).map(|_| self.uniform(lo, hi)).collect()
    }

    /// Draw `k` harmonic terms. Consumes `3k` values from the stream.
    pub fn generate(&mut self, k: usize) -> ParameterSet {
        let amplitudes = self.draw(k, AMPLITUDE_RANGE);
        let frequencies = self.draw(k, FREQUENCY_RANGE);
        let phases = self.draw(k, PHASE_RANGE);
        ParameterSet::new(amplitudes, frequencies, phases)
    }
}

/// Generate `k` harmonic terms from `seed`.
///
/// Identical `(seed, k)` always yields bit-identical output. `k = 0`
/// yields an empty set.
pub fn generate_parameters(seed: &str, k: usize) -> ParameterSet {
    ParameterGenerator::from_seed(seed).generate(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = generate_parameters("node_01", 10);
        let b = generate_parameters("node_01", 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_sensitivity() {
        let a = generate_parameters("node_01", 10);
        let b = generate_parameters("node_02", 10);
        assert_ne!(a.amplitudes, b.amplitudes);
    }

    #[test]
    fn test_lengths() {
        let p = generate_parameters("demo-seed", 7);
        assert_eq!(p.amplitudes.len(), 7);
        assert_eq!(p.frequencies.len(), 7);
        assert_eq!(p.phases.len(), 7);
        assert!(p.check_shape().is_ok());
    }

    #[test]
    fn test_zero_k_is_empty() {
        let p = generate_parameters("demo-seed", 0);
        assert!(p.is_empty());
        assert!(p.frequencies.is_empty());
        assert!(p.phases.is_empty());
    }

    #[test]
    fn test_ranges() {
        let p = generate_parameters("range-check", 200);
        assert!(p.amplitudes.iter().all(|v| (0.5..1.5).contains(v)));
        assert!(p.frequencies.iter().all(|v| (1.0..5.0).contains(v)));
        assert!(p.phases.iter().all(|v| (0.0..TAU).contains(v)));
    }

    #[test]
    fn test_pinned_demo_seed() {
        let p = generate_parameters("demo-seed", 10);
        assert!((p.amplitudes[0] - 0.8692522530527219).abs() < 1e-12);
        assert!((p.amplitudes[9] - 0.9014202244317439).abs() < 1e-12);
        assert!((p.frequencies[0] - 4.3181487219293135).abs() < 1e-12);
        assert!((p.phases[9] - 5.098303995790111).abs() < 1e-12);
    }

    #[test]
    fn test_draw_order_amplitudes_first() {
        // With k = 1 the frequency is the second draw of the stream.
        let one = generate_parameters("demo-seed", 1);
        let ten = generate_parameters("demo-seed", 10);
        assert_eq!(one.amplitudes[0], ten.amplitudes[0]);
        let expected_t = 1.0 + 4.0 * ((ten.amplitudes[1] - 0.5) / 1.0);
        assert!((one.frequencies[0] - expected_t).abs() < 1e-12);
    }

    #[test]
    fn test_stream_continues_after_parameters() {
        let mut generator = ParameterGenerator::from_seed("node_01");
        generator.generate(10);
        let e = generator.uniform(0.5, 2.0);
        assert!((e - 0.9409673409676986).abs() < 1e-12);
    }
}
