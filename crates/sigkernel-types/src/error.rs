// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Signature Kernel Error Hierarchy
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

use crate::signature::SignatureId;

/// Root error type for all Signature Kernel failures.
///
/// Every variant is raised synchronously at the point of failure and is
/// not retried. An invalid path is not an error: the validator reports
/// it as a plain `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignatureError {
    /// Structure function evaluated outside the logarithm domain.
    #[error("logarithm domain violation: x + 1 must be positive, got x = {x}")]
    Domain { x: f64 },

    /// Amplitude, frequency and phase sequences differ in length.
    #[error(
        "parameter shape mismatch: amplitudes ({amplitudes}), frequencies ({frequencies}) \
         and phases ({phases}) must have the same length"
    )]
    ShapeMismatch {
        amplitudes: usize,
        frequencies: usize,
        phases: usize,
    },

    /// A node with this id is already present in the DAG.
    #[error("duplicate signature id: {0}")]
    DuplicateId(SignatureId),

    /// A node lists its own id among its references.
    #[error("signature {0} references itself")]
    SelfReference(SignatureId),

    /// No node with this id exists in the DAG.
    #[error("signature {0} not found")]
    NodeNotFound(SignatureId),

    /// Mean entropy of an empty path is undefined.
    #[error("cannot validate an empty signature path")]
    EmptyPath,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type SignatureResult<T> = Result<T, SignatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_message_names_logarithm() {
        let msg = SignatureError::Domain { x: -2.0 }.to_string();
        assert!(msg.contains("logarithm domain"), "{msg}");
        assert!(msg.contains("-2"));
    }

    #[test]
    fn test_shape_mismatch_message() {
        let msg = SignatureError::ShapeMismatch {
            amplitudes: 1,
            frequencies: 1,
            phases: 2,
        }
        .to_string();
        assert!(msg.contains("same length"), "{msg}");
    }
}
