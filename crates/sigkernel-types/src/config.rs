// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Signature Kernel Configuration
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{SignatureError, SignatureResult};

/// Normalisation divisor of the deviation residual in node weights.
///
/// Fixed at the default tolerance; intentionally not derived from
/// `KernelConfig::epsilon`.
pub const WEIGHT_RESIDUAL_NORM: f64 = 0.1;

/// Default number of harmonic terms.
pub const DEFAULT_K: usize = 10;

/// Runtime configuration for signature generation, weighting and
/// path validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Number of harmonic terms in the structure function.
    /// Default: 10.
    pub k: usize,

    /// Target value the structure function is compared against.
    /// Default: 0.5.
    pub tau: f64,

    /// Pass tolerance: a signature passes iff delta < epsilon.
    /// Default: 0.1.
    pub epsilon: f64,

    /// Weight of the reference count term.
    /// Default: 1.0.
    pub alpha: f64,

    /// Weight of the deviation residual term.
    /// Default: 1.0.
    pub beta: f64,

    /// Weight of the entropy term.
    /// Default: 1.0.
    pub gamma: f64,

    /// Minimum mean entropy for a valid path.
    /// Default: 1.0.
    pub entropy_threshold: f64,

    /// Entropy of index 0 under the linear entropy policy.
    /// Default: 1.0.
    pub entropy_base: f64,

    /// Entropy increment per index under the linear entropy policy.
    /// Default: 0.05.
    pub entropy_step: f64,

    /// How many preceding signatures each new signature references.
    /// Default: 1.
    pub reference_window: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            tau: 0.5,
            epsilon: 0.1,
            alpha: 1.0,
            beta: 1.0,
            gamma: 1.0,
            entropy_threshold: 1.0,
            entropy_base: 1.0,
            entropy_step: 0.05,
            reference_window: 1,
        }
    }
}

impl KernelConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> SignatureResult<()> {
        let finite = [
            ("tau", self.tau),
            ("epsilon", self.epsilon),
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
            ("entropy_threshold", self.entropy_threshold),
            ("entropy_base", self.entropy_base),
            ("entropy_step", self.entropy_step),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SignatureError::Config(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.k == 0 {
            return Err(SignatureError::Config("k must be >= 1".to_string()));
        }
        if self.epsilon <= 0.0 {
            return Err(SignatureError::Config(format!(
                "epsilon must be > 0, got {}",
                self.epsilon
            )));
        }
        if self.entropy_threshold < 0.0 {
            return Err(SignatureError::Config(format!(
                "entropy_threshold must be >= 0, got {}",
                self.entropy_threshold
            )));
        }
        if self.reference_window == 0 {
            return Err(SignatureError::Config(
                "reference_window must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SignatureResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SignatureError::Config(format!("JSON parse error: {e}")))
    }
}
