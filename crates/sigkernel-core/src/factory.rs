// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Signature Factory
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Builds ordered signature sequences from a seed.
//!
//! One parameter set is drawn per build and reused for every index.
//! Each signature references the ids of the `reference_window`
//! signatures built immediately before it, so a sequence only ever
//! points backwards.

use std::collections::VecDeque;

use sigkernel_types::{KernelConfig, Signature, SignatureId, SignatureResult};

use crate::params::ParameterGenerator;
use crate::structure::StructureFunction;

/// How a signature's entropy value is assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntropyPolicy {
    /// `base + step * i` for 1-based index `i`.
    Linear { base: f64, step: f64 },
    /// Uniform in `[low, high)`, drawn from the seeded stream after the
    /// parameters.
    Uniform { low: f64, high: f64 },
}

impl Default for EntropyPolicy {
    fn default() -> Self {
        Self::Linear {
            base: 1.0,
            step: 0.05,
        }
    }
}

/// Signature sequence builder.
#[derive(Debug, Clone)]
pub struct SignatureFactory {
    k: usize,
    tau: f64,
    epsilon: f64,
    reference_window: usize,
    entropy: EntropyPolicy,
}

impl Default for SignatureFactory {
    fn default() -> Self {
        Self::from_config(&KernelConfig::default())
    }
}

impl SignatureFactory {
    pub fn new(tau: f64, epsilon: f64) -> Self {
        Self {
            tau,
            epsilon,
            ..Default::default()
        }
    }

    pub fn from_config(config: &KernelConfig) -> Self {
        Self {
            k: config.k,
            tau: config.tau,
            epsilon: config.epsilon,
            reference_window: config.reference_window.max(1),
            entropy: EntropyPolicy::Linear {
                base: config.entropy_base,
                step: config.entropy_step,
            },
        }
    }

    pub fn with_entropy(mut self, entropy: EntropyPolicy) -> Self {
        self.entropy = entropy;
        self
    }

    /// Number of preceding signatures each signature references.
    /// Zero is treated as one.
    pub fn with_reference_window(mut self, window: usize) -> Self {
        self.reference_window = window.max(1);
        self
    }

    pub fn with_harmonics(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Build signatures for `x = 1..=count`.
    ///
    /// Same `(seed, count)` yields identical field values on every call;
    /// only the ids differ.
    pub fn build(&self, seed: &str, count: usize) -> SignatureResult<Vec<Signature>> {
        let mut generator = ParameterGenerator::from_seed(seed);
        let function = StructureFunction::new(generator.generate(self.k))?;

        let mut path = Vec::new();
        let mut recent: VecDeque<SignatureId> =
            VecDeque::with_capacity(self.reference_window.min(count));

        for i in 1..=count {
            let x = i as f64;
            let (phi_x, delta_x) = function.evaluate(x, self.tau)?;
            let zk_passed = delta_x < self.epsilon;
            let entropy = match self.entropy {
                EntropyPolicy::Linear { base, step } => base + step * x,
                EntropyPolicy::Uniform { low, high } => generator.uniform(low, high),
            };

            let sig = Signature::new(
                x,
                phi_x,
                delta_x,
                zk_passed,
                entropy,
                recent.iter().copied().collect(),
            );

            if recent.len() == self.reference_window {
                recent.pop_front();
            }
            recent.push_back(sig.id());
            path.push(sig);
        }

        log::debug!(
            "built {count} signatures for seed {seed:?}, {} passed",
            path.iter().filter(|s| s.zk_passed()).count()
        );
        Ok(path)
    }
}

/// Build the default signature path: ten harmonics, linear entropy
/// `1.0 + 0.05 * i`, each signature referencing only its predecessor.
pub fn build_signature_path(
    seed: &str,
    count: usize,
    tau: f64,
    epsilon: f64,
) -> SignatureResult<Vec<Signature>> {
    SignatureFactory::new(tau, epsilon).build(seed, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::delta;

    #[test]
    fn test_path_length_and_indices() {
        let path = build_signature_path("demo-seed", 5, 0.5, 0.1).unwrap();
        assert_eq!(path.len(), 5);
        for (i, sig) in path.iter().enumerate() {
            assert_eq!(sig.x(), (i + 1) as f64);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(build_signature_path("demo-seed", 0, 0.5, 0.1)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_references_chain_predecessor() {
        let path = build_signature_path("demo-seed", 5, 0.5, 0.1).unwrap();
        assert!(path[0].references().is_empty());
        for pair in path.windows(2) {
            assert_eq!(pair[1].references(), &[pair[0].id()]);
        }
    }

    #[test]
    fn test_linear_entropy() {
        let path = build_signature_path("demo-seed", 4, 0.5, 0.1).unwrap();
        let expected = [1.05, 1.1, 1.15, 1.2];
        for (sig, e) in path.iter().zip(expected) {
            assert!((sig.entropy() - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fields_consistent() {
        let path = build_signature_path("alpha", 10, 0.5, 0.1).unwrap();
        for sig in &path {
            assert!((sig.delta_x() - delta(sig.phi_x(), 0.5)).abs() < 1e-15);
            assert_eq!(sig.zk_passed(), sig.delta_x() < 0.1);
        }
    }

    #[test]
    fn test_pinned_demo_values() {
        let path = build_signature_path("demo-seed", 5, 0.5, 0.1).unwrap();
        let expected = [
            -0.7665643029277274,
            -3.0660890472263675,
            -1.4675545704866992,
            0.7527666766924113,
            2.0667581753658415,
        ];
        for (sig, phi_x) in path.iter().zip(expected) {
            assert!((sig.phi_x() - phi_x).abs() < 1e-12);
            assert!(!sig.zk_passed());
        }
    }

    #[test]
    fn test_pass_flag_hits() {
        // Seed "beta" lands within tolerance at x = 4.
        let path = build_signature_path("beta", 5, 0.5, 0.1).unwrap();
        let passed: Vec<f64> = path
            .iter()
            .filter(|s| s.zk_passed())
            .map(|s| s.x())
            .collect();
        assert_eq!(passed, vec![4.0]);
    }

    #[test]
    fn test_rebuild_same_values_new_ids() {
        let a = build_signature_path("demo-seed", 3, 0.5, 0.1).unwrap();
        let b = build_signature_path("demo-seed", 3, 0.5, 0.1).unwrap();
        for (sa, sb) in a.iter().zip(&b) {
            assert_ne!(sa.id(), sb.id());
            assert_eq!(sa.phi_x(), sb.phi_x());
            assert_eq!(sa.delta_x(), sb.delta_x());
            assert_eq!(sa.zk_passed(), sb.zk_passed());
            assert_eq!(sa.entropy(), sb.entropy());
        }
    }

    #[test]
    fn test_reference_window() {
        let path = SignatureFactory::default()
            .with_reference_window(3)
            .build("node_01", 6)
            .unwrap();
        assert_eq!(path[0].references().len(), 0);
        assert_eq!(path[1].references().len(), 1);
        assert_eq!(path[2].references().len(), 2);
        assert_eq!(path[3].references().len(), 3);
        assert_eq!(
            path[5].references(),
            &[path[2].id(), path[3].id(), path[4].id()]
        );
    }

    #[test]
    fn test_unbounded_window_does_not_overallocate() {
        let config = KernelConfig::from_json(r#"{"reference_window": 18446744073709551615}"#).unwrap();
        assert!(config.validate().is_ok());
        let path = SignatureFactory::from_config(&config)
            .build("demo-seed", 3)
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[2].references(), &[path[0].id(), path[1].id()]);
    }

    #[test]
    fn test_with_harmonics() {
        let one = SignatureFactory::default()
            .with_harmonics(1)
            .build("demo-seed", 1)
            .unwrap();
        // Single term: A0 · cos(t0 · ln 2 + θ0).
        let p = crate::params::generate_parameters("demo-seed", 1);
        let expected =
            p.amplitudes[0] * (p.frequencies[0] * 2f64.ln() + p.phases[0]).cos();
        assert!((one[0].phi_x() - expected).abs() < 1e-12);

        let empty = SignatureFactory::default()
            .with_harmonics(0)
            .build("demo-seed", 2)
            .unwrap();
        assert!(empty.iter().all(|s| s.phi_x() == 0.0));
    }

    #[test]
    fn test_uniform_entropy_is_seeded() {
        let factory = SignatureFactory::default().with_entropy(EntropyPolicy::Uniform {
            low: 0.5,
            high: 2.0,
        });
        let a = factory.build("node_01", 8).unwrap();
        let b = factory.build("node_01", 8).unwrap();
        assert!((a[0].entropy() - 0.9409673409676986).abs() < 1e-12);
        for (sa, sb) in a.iter().zip(&b) {
            assert_eq!(sa.entropy(), sb.entropy());
            assert!((0.5..2.0).contains(&sa.entropy()));
        }
    }

    #[test]
    fn test_from_config() {
        let config = KernelConfig {
            tau: 0.0,
            entropy_base: 2.0,
            entropy_step: 0.0,
            ..Default::default()
        };
        let path = SignatureFactory::from_config(&config)
            .build("demo-seed", 2)
            .unwrap();
        assert!((path[0].delta_x() - 0.7665643029277274).abs() < 1e-12);
        assert_eq!(path[1].entropy(), 2.0);
    }
}
