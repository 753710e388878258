// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Signature Kernel Record Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parameter sets, signature identities and signature records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SignatureError, SignatureResult};

/// Opaque, globally unique signature identifier.
///
/// Only equality, ordering and hashing are meaningful; the wrapped value
/// carries no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureId(Uuid);

impl SignatureId {
    /// Fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SignatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SignatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SignatureId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Harmonic parameters of the structure function.
///
/// `amplitudes[i]`, `frequencies[i]` and `phases[i]` together form the
/// i-th cosine term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub amplitudes: Vec<f64>,
    pub frequencies: Vec<f64>,
    pub phases: Vec<f64>,
}

impl ParameterSet {
    pub fn new(amplitudes: Vec<f64>, frequencies: Vec<f64>, phases: Vec<f64>) -> Self {
        Self {
            amplitudes,
            frequencies,
            phases,
        }
    }

    /// Number of harmonic terms. Only meaningful after `check_shape`.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Fails with `ShapeMismatch` unless all three sequences agree in length.
    pub fn check_shape(&self) -> SignatureResult<()> {
        check_shape(&self.amplitudes, &self.frequencies, &self.phases)
    }
}

/// Length check shared by `ParameterSet` and the slice-level `phi`.
pub fn check_shape(amplitudes: &[f64], frequencies: &[f64], phases: &[f64]) -> SignatureResult<()> {
    if amplitudes.len() == frequencies.len() && frequencies.len() == phases.len() {
        Ok(())
    } else {
        Err(SignatureError::ShapeMismatch {
            amplitudes: amplitudes.len(),
            frequencies: frequencies.len(),
            phases: phases.len(),
        })
    }
}

/// One evaluated index of the structure function.
///
/// Built once and never modified; fields are exposed through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    id: SignatureId,
    x: f64,
    phi_x: f64,
    delta_x: f64,
    zk_passed: bool,
    entropy: f64,
    references: Vec<SignatureId>,
}

impl Signature {
    /// Package computed fields under a freshly generated id.
    pub fn new(
        x: f64,
        phi_x: f64,
        delta_x: f64,
        zk_passed: bool,
        entropy: f64,
        references: Vec<SignatureId>,
    ) -> Self {
        Self {
            id: SignatureId::new(),
            x,
            phi_x,
            delta_x,
            zk_passed,
            entropy,
            references,
        }
    }

    pub fn id(&self) -> SignatureId {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn phi_x(&self) -> f64 {
        self.phi_x
    }

    /// Deviation `|phi_x - tau|`, always >= 0.
    pub fn delta_x(&self) -> f64 {
        self.delta_x
    }

    /// True iff `delta_x < epsilon` at build time.
    pub fn zk_passed(&self) -> bool {
        self.zk_passed
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Ids of earlier signatures this one depends on, in order.
    pub fn references(&self) -> &[SignatureId] {
        &self.references
    }
}

impl AsRef<Signature> for Signature {
    fn as_ref(&self) -> &Signature {
        self
    }
}
