// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Signature Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Signature Kernel: seeded structure signatures, their reference
//! DAG, and the path validator.

pub mod config;
pub mod error;
pub mod signature;

pub use config::{KernelConfig, DEFAULT_K, WEIGHT_RESIDUAL_NORM};
pub use error::{SignatureError, SignatureResult};
pub use signature::{ParameterSet, Signature, SignatureId};
