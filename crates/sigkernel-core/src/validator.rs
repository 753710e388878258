// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Structure Path Validator
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Checks an ordered signature chain against the path policy:
//!
//! 1. every signature passed (`zk_passed`),
//! 2. deviation is finite and never increases step over step (ties
//!    allowed),
//! 3. mean entropy reaches the threshold.
//!
//! The first two checks short-circuit at the first offending element.
//! An invalid path is an expected outcome and is reported, not raised.
//! An empty path has no mean entropy: the detailed validator returns
//! `EmptyPath` and the boolean form treats it as invalid.

use sigkernel_types::{KernelConfig, Signature, SignatureError, SignatureResult};

/// Why a path was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathFailure {
    /// Signature at `index` did not pass.
    PassFlag { index: usize },
    /// Signature at `index` deviates more than its predecessor, or its
    /// deviation is not finite.
    DeltaIncrease {
        index: usize,
        delta: f64,
        previous: f64,
    },
    /// Mean entropy below the threshold.
    LowEntropy { mean: f64, threshold: f64 },
}

/// Outcome of validating a non-empty path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathReport {
    pub valid: bool,
    /// `None` when a per-node check short-circuited.
    pub mean_entropy: Option<f64>,
    pub failure: Option<PathFailure>,
}

impl PathReport {
    fn rejected(failure: PathFailure) -> Self {
        Self {
            valid: false,
            mean_entropy: None,
            failure: Some(failure),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathValidator {
    pub entropy_threshold: f64,
}

impl Default for PathValidator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PathValidator {
    pub fn new(entropy_threshold: f64) -> Self {
        Self { entropy_threshold }
    }

    pub fn from_config(config: &KernelConfig) -> Self {
        Self::new(config.entropy_threshold)
    }

    /// Validate `path`, reporting the first failure.
    pub fn validate<S: AsRef<Signature>>(&self, path: &[S]) -> SignatureResult<PathReport> {
        if path.is_empty() {
            return Err(SignatureError::EmptyPath);
        }

        let mut previous = f64::INFINITY;
        let mut entropy_sum = 0.0;
        for (index, sig) in path.iter().enumerate() {
            let sig: &Signature = sig.as_ref();
            if !sig.zk_passed() {
                log::debug!("path rejected at {index}: signature {} did not pass", sig.id());
                return Ok(PathReport::rejected(PathFailure::PassFlag { index }));
            }
            let delta = sig.delta_x();
            if !delta.is_finite() || delta > previous {
                log::debug!("path rejected at {index}: delta {delta} > {previous}");
                return Ok(PathReport::rejected(PathFailure::DeltaIncrease {
                    index,
                    delta,
                    previous,
                }));
            }
            previous = delta;
            entropy_sum += sig.entropy();
        }

        let mean = entropy_sum / path.len() as f64;
        let valid = mean >= self.entropy_threshold;
        if !valid {
            log::debug!(
                "path rejected: mean entropy {mean:.4} < {}",
                self.entropy_threshold
            );
        }
        Ok(PathReport {
            valid,
            mean_entropy: Some(mean),
            failure: (!valid).then_some(PathFailure::LowEntropy {
                mean,
                threshold: self.entropy_threshold,
            }),
        })
    }

    /// Boolean verdict. Empty paths are invalid.
    pub fn is_valid<S: AsRef<Signature>>(&self, path: &[S]) -> bool {
        self.validate(path).map(|r| r.valid).unwrap_or(false)
    }
}

/// Whether `path` satisfies the path policy at `entropy_threshold`.
pub fn is_valid_structure_path<S: AsRef<Signature>>(path: &[S], entropy_threshold: f64) -> bool {
    PathValidator::new(entropy_threshold).is_valid(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::DagNode;

    fn sig(delta_x: f64, zk_passed: bool, entropy: f64) -> Signature {
        Signature::new(1.0, 0.5 + delta_x, delta_x, zk_passed, entropy, vec![])
    }

    #[test]
    fn test_valid_path() {
        let path = [sig(0.08, true, 1.1), sig(0.07, true, 1.2), sig(0.05, true, 1.3)];
        assert!(is_valid_structure_path(&path, 1.0));
        let report = PathValidator::default().validate(&path).unwrap();
        assert!((report.mean_entropy.unwrap() - 1.2).abs() < 1e-9);
        assert_eq!(report.failure, None);
    }

    #[test]
    fn test_increasing_delta_rejected() {
        let path = [sig(0.05, true, 5.0), sig(0.06, true, 5.0)];
        assert!(!is_valid_structure_path(&path, 1.0));
        let report = PathValidator::default().validate(&path).unwrap();
        assert!(matches!(
            report.failure,
            Some(PathFailure::DeltaIncrease { index: 1, .. })
        ));
        assert_eq!(report.mean_entropy, None);
    }

    #[test]
    fn test_non_finite_delta_rejected() {
        let path = [sig(0.05, true, 1.5), sig(f64::NAN, true, 1.5), sig(0.09, true, 1.5)];
        assert!(!is_valid_structure_path(&path, 1.0));
        let report = PathValidator::default().validate(&path).unwrap();
        assert!(matches!(
            report.failure,
            Some(PathFailure::DeltaIncrease { index: 1, .. })
        ));

        let path = [sig(f64::INFINITY, true, 1.5)];
        assert!(!is_valid_structure_path(&path, 1.0));
    }

    #[test]
    fn test_equal_delta_allowed() {
        let path = [sig(0.05, true, 1.0), sig(0.05, true, 1.0)];
        assert!(is_valid_structure_path(&path, 1.0));
    }

    #[test]
    fn test_failed_pass_flag_rejected() {
        let path = [sig(0.05, false, 1.1), sig(0.04, true, 1.2)];
        assert!(!is_valid_structure_path(&path, 1.0));

        let path = [sig(0.05, true, 1.1), sig(0.04, true, 1.2), sig(0.03, false, 1.3)];
        let report = PathValidator::default().validate(&path).unwrap();
        assert_eq!(report.failure, Some(PathFailure::PassFlag { index: 2 }));
    }

    #[test]
    fn test_low_entropy_rejected() {
        let path = [sig(0.03, true, 0.8), sig(0.02, true, 0.9)];
        assert!(!is_valid_structure_path(&path, 1.0));
        let report = PathValidator::default().validate(&path).unwrap();
        match report.failure {
            Some(PathFailure::LowEntropy { mean, threshold }) => {
                assert!((mean - 0.85).abs() < 1e-9);
                assert_eq!(threshold, 1.0);
            }
            other => panic!("unexpected failure {other:?}"),
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let path = [sig(0.03, true, 1.0)];
        assert!(is_valid_structure_path(&path, 1.0));
        assert!(!is_valid_structure_path(&path, 1.0 + 1e-9));
    }

    #[test]
    fn test_empty_path() {
        let path: [Signature; 0] = [];
        assert!(!is_valid_structure_path(&path, 0.0));
        assert_eq!(
            PathValidator::default().validate(&path),
            Err(SignatureError::EmptyPath)
        );
    }

    #[test]
    fn test_accepts_dag_nodes() {
        let nodes: Vec<DagNode> = [sig(0.09, true, 1.5), sig(0.01, true, 1.5)]
            .into_iter()
            .map(DagNode::new)
            .collect();
        assert!(is_valid_structure_path(&nodes, 1.0));
    }

    #[test]
    fn test_generated_path_with_passing_step() {
        use crate::factory::build_signature_path;
        // Only x = 4 passes for this seed.
        let path = build_signature_path("beta", 5, 0.5, 0.1).unwrap();
        assert!(!is_valid_structure_path(&path, 1.0));
        assert!(is_valid_structure_path(&path[3..4], 1.0));
    }
}
