// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Signature Kernel Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Seeded structure signatures, their reference DAG, and the path
//! validator.
//!
//! Data flow: `ParameterGenerator` → `StructureFunction` →
//! `SignatureFactory` → { `SignatureDag` (weighted by `WeightScorer`),
//! `PathValidator` }.
//!
//! # Invariants
//!
//! 1. **Reproducibility**: the same seed string yields bit-identical
//!    parameters and therefore identical signature values. The generator
//!    family (SHA-256 keyed ChaCha8) and the draw order are fixed.
//!
//! 2. **Acyclicity by construction**: signatures only reference ids
//!    built before them; the DAG additionally refuses self-references.
//!
//! 3. **Validation is total**: `is_valid_structure_path` never panics and
//!    never errors; empty paths are invalid.

pub mod dag;
pub mod factory;
pub mod params;
pub mod simulate;
pub mod structure;
pub mod validator;
pub mod weight;

pub use dag::{DagNode, SharedDag, SignatureDag};
pub use factory::{build_signature_path, EntropyPolicy, SignatureFactory};
pub use params::{generate_parameters, ParameterGenerator};
pub use simulate::simulate_dag;
pub use structure::{delta, phi, StructureFunction};
pub use validator::{is_valid_structure_path, PathFailure, PathReport, PathValidator};
pub use weight::WeightScorer;
