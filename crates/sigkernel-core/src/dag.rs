// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Signature Reference DAG
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Append-only store of signatures and their reference edges.
//!
//! Acyclicity follows from insertion order: a signature may only
//! reference signatures built before it. References to ids that have no
//! node are tolerated and simply create an adjacency entry; a node
//! referencing its own id is rejected.

use std::collections::HashMap;

use parking_lot::Mutex;

use sigkernel_types::{Signature, SignatureError, SignatureId, SignatureResult};

use crate::weight::WeightScorer;

/// A signature owned by the DAG, plus its composite weight.
#[derive(Debug, Clone, PartialEq)]
pub struct DagNode {
    signature: Signature,
    weight: f64,
}

impl DagNode {
    pub fn new(signature: Signature) -> Self {
        Self {
            signature,
            weight: 0.0,
        }
    }

    pub fn id(&self) -> SignatureId {
        self.signature.id()
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

impl From<Signature> for DagNode {
    fn from(signature: Signature) -> Self {
        Self::new(signature)
    }
}

impl AsRef<Signature> for DagNode {
    fn as_ref(&self) -> &Signature {
        &self.signature
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignatureDag {
    nodes: HashMap<SignatureId, DagNode>,
    /// referenced id -> ids referencing it, in insertion order
    edges: HashMap<SignatureId, Vec<SignatureId>>,
}

impl SignatureDag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node and record an edge from each of its references.
    pub fn add_node(&mut self, node: DagNode) -> SignatureResult<()> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(SignatureError::DuplicateId(id));
        }
        if node.signature().references().contains(&id) {
            return Err(SignatureError::SelfReference(id));
        }

        for reference in node.signature().references() {
            if !self.nodes.contains_key(reference) {
                log::warn!("signature {id} references unknown signature {reference}");
            }
            self.edges.entry(*reference).or_default().push(id);
        }
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Compute and store a node's weight. See [`WeightScorer`].
    pub fn compute_weight(node: &mut DagNode, alpha: f64, beta: f64, gamma: f64) -> f64 {
        WeightScorer::new(alpha, beta, gamma).score(node)
    }

    /// Recompute the weight of a node already in the graph.
    pub fn reweigh(&mut self, id: SignatureId, scorer: &WeightScorer) -> SignatureResult<f64> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(SignatureError::NodeNotFound(id))?;
        Ok(scorer.score(node))
    }

    pub fn get(&self, id: SignatureId) -> Option<&DagNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: SignatureId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Ids of nodes that reference `id`, in insertion order.
    pub fn referrers(&self, id: SignatureId) -> &[SignatureId] {
        self.edges.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Referenced ids with no corresponding node.
    pub fn dangling_references(&self) -> Vec<SignatureId> {
        let mut dangling: Vec<SignatureId> = self
            .edges
            .keys()
            .filter(|id| !self.nodes.contains_key(id))
            .copied()
            .collect();
        dangling.sort();
        dangling
    }

    pub fn nodes(&self) -> impl Iterator<Item = &DagNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

/// DAG guarded by a `parking_lot::Mutex`, for inserting from several
/// threads. Parameter generation itself must stay sequential.
#[derive(Debug, Default)]
pub struct SharedDag {
    inner: Mutex<SignatureDag>,
}

impl SharedDag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&self, node: DagNode) -> SignatureResult<()> {
        self.inner.lock().add_node(node)
    }

    /// Run `f` with the graph locked.
    pub fn with_dag<R>(&self, f: impl FnOnce(&SignatureDag) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn into_inner(self) -> SignatureDag {
        self.inner.into_inner()
    }
}
