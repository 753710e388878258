// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Node Weight Scorer
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Composite node weight
//!
//! ```text
//! w = α · |references| + β · (1 − δ / 0.1) + γ · entropy
//! ```
//!
//! The residual divisor is `WEIGHT_RESIDUAL_NORM`, not the pass tolerance
//! in use. Deviations above 0.1 drive the residual negative, which
//! penalises high-deviation nodes.

use sigkernel_types::{KernelConfig, WEIGHT_RESIDUAL_NORM};

use crate::dag::DagNode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightScorer {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Default for WeightScorer {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl WeightScorer {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn from_config(config: &KernelConfig) -> Self {
        Self::new(config.alpha, config.beta, config.gamma)
    }

    /// Weight of a node without touching it.
    pub fn weigh(&self, node: &DagNode) -> f64 {
        let sig = node.signature();
        let reference_term = sig.references().len() as f64;
        let residual_term = 1.0 - sig.delta_x() / WEIGHT_RESIDUAL_NORM;
        self.alpha * reference_term + self.beta * residual_term + self.gamma * sig.entropy()
    }

    /// Store the weight on the node and return it.
    pub fn score(&self, node: &mut DagNode) -> f64 {
        let weight = self.weigh(node);
        node.set_weight(weight);
        weight
    }
}
