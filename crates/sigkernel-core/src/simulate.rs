// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Signature DAG Simulation
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Grows a weighted DAG from a seed: every new signature references the
//! last three inserted nodes and draws its entropy from the seeded
//! stream, so the whole graph (ids aside) is reproducible.

use sigkernel_types::{KernelConfig, SignatureResult};

use crate::dag::{DagNode, SignatureDag};
use crate::factory::{EntropyPolicy, SignatureFactory};
use crate::weight::WeightScorer;

/// Number of most recent nodes each simulated node references.
pub const SIMULATION_FAN_IN: usize = 3;

/// Entropy range of simulated nodes.
pub const SIMULATION_ENTROPY: (f64, f64) = (0.5, 2.0);

/// Build and weigh `count` signatures, inserting each into a fresh DAG.
pub fn simulate_dag(seed: &str, count: usize, config: &KernelConfig) -> SignatureResult<SignatureDag> {
    config.validate()?;
    let (low, high) = SIMULATION_ENTROPY;
    let signatures = SignatureFactory::from_config(config)
        .with_reference_window(SIMULATION_FAN_IN)
        .with_entropy(EntropyPolicy::Uniform { low, high })
        .build(seed, count)?;

    let scorer = WeightScorer::from_config(config);
    let mut dag = SignatureDag::new();
    let mut passed = 0usize;
    for sig in signatures {
        passed += usize::from(sig.zk_passed());
        let mut node = DagNode::new(sig);
        scorer.score(&mut node);
        dag.add_node(node)?;
    }

    log::info!(
        "simulated DAG for seed {seed:?}: {} nodes, {} edges, {passed} passed",
        dag.len(),
        dag.edge_count()
    );
    Ok(dag)
}
