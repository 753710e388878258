// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Structure Function (φ / δ)
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Multi-harmonic structure function
//!
//! ```text
//! φ(x) = Σᵢ Aᵢ · cos(tᵢ · ln(x + 1) + θᵢ)
//! δ(φ, τ) = |φ − τ|
//! ```
//!
//! Terms are summed in index order so results are reproducible to the bit.

use sigkernel_types::signature::check_shape;
use sigkernel_types::{ParameterSet, SignatureError, SignatureResult};

/// Evaluate φ at `x`.
///
/// Fails with `Domain` when `x + 1 <= 0` and with `ShapeMismatch` when
/// the three sequences differ in length. The domain is checked first.
pub fn phi(x: f64, amplitudes: &[f64], frequencies: &[f64], phases: &[f64]) -> SignatureResult<f64> {
    if x + 1.0 <= 0.0 {
        return Err(SignatureError::Domain { x });
    }
    check_shape(amplitudes, frequencies, phases)?;

    let log_x = (x + 1.0).ln();
    let value = amplitudes
        .iter()
        .zip(frequencies)
        .zip(phases)
        .fold(0.0, |acc, ((a, t), theta)| acc + a * (t * log_x + theta).cos());

    if !value.is_finite() {
        log::warn!("phi({x}) produced non-finite value {value}");
    }
    Ok(value)
}

/// Deviation of `phi_x` from the target `tau`.
#[inline]
pub fn delta(phi_x: f64, tau: f64) -> f64 {
    (phi_x - tau).abs()
}

/// A parameter set bound as an evaluable function.
#[derive(Debug, Clone)]
pub struct StructureFunction {
    params: ParameterSet,
}

impl StructureFunction {
    /// Fails with `ShapeMismatch` if the parameter set is ragged.
    pub fn new(params: ParameterSet) -> SignatureResult<Self> {
        params.check_shape()?;
        Ok(Self { params })
    }

    pub fn phi(&self, x: f64) -> SignatureResult<f64> {
        phi(
            x,
            &self.params.amplitudes,
            &self.params.frequencies,
            &self.params.phases,
        )
    }

    /// `(φ(x), δ(φ(x), τ))`.
    pub fn evaluate(&self, x: f64, tau: f64) -> SignatureResult<(f64, f64)> {
        let phi_x = self.phi(x)?;
        Ok((phi_x, delta(phi_x, tau)))
    }
}
