// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Signature Kernel PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied; PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the Signature Kernel.
//!
//! Exposes parameter generation, the structure function, signature
//! paths, the signature DAG and the path validator to Python via PyO3.
//!
//! - Kernel errors surface as `ValueError` carrying the Rust message.
//! - Signature ids cross the boundary as UUID strings.
//! - All config validated before storage (`KernelConfig::validate()`).
//!
//! Install: `pip install -e crates/sigkernel-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from sigkernel import build_signature_path, is_valid_structure_path
//!
//! path = build_signature_path("demo-seed", 5)
//! print([s.to_dict() for s in path])
//! print(is_valid_structure_path(path))
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use sigkernel_core::{SignatureDag, WeightScorer};
use sigkernel_types::{KernelConfig, Signature, SignatureError, SignatureId};

fn to_py_err(e: SignatureError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse_id(id: &str) -> PyResult<SignatureId> {
    id.parse()
        .map_err(|e| PyValueError::new_err(format!("invalid signature id {id:?}: {e}")))
}

// ─── PyKernelConfig ─────────────────────────────────────────────────

/// Python-visible configuration for the Signature Kernel.
#[pyclass(name = "KernelConfig")]
#[derive(Clone)]
struct PyKernelConfig {
    inner: KernelConfig,
}

#[pymethods]
impl PyKernelConfig {
    #[new]
    #[pyo3(signature = (
        k = 10,
        tau = 0.5,
        epsilon = 0.1,
        alpha = 1.0,
        beta = 1.0,
        gamma = 1.0,
        entropy_threshold = 1.0,
        entropy_base = 1.0,
        entropy_step = 0.05,
        reference_window = 1,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        k: usize,
        tau: f64,
        epsilon: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
        entropy_threshold: f64,
        entropy_base: f64,
        entropy_step: f64,
        reference_window: usize,
    ) -> PyResult<Self> {
        let config = KernelConfig {
            k,
            tau,
            epsilon,
            alpha,
            beta,
            gamma,
            entropy_threshold,
            entropy_base,
            entropy_step,
            reference_window,
        };
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = KernelConfig::from_json(json).map_err(to_py_err)?;
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    fn __repr__(&self) -> String {
        format!(
            "KernelConfig(k={}, tau={}, epsilon={}, entropy_threshold={})",
            self.inner.k, self.inner.tau, self.inner.epsilon, self.inner.entropy_threshold
        )
    }
}

// ─── PySignature ────────────────────────────────────────────────────

/// Python-visible immutable signature record.
#[pyclass(name = "Signature", frozen)]
#[derive(Clone)]
struct PySignature {
    inner: Signature,
}

#[pymethods]
impl PySignature {
    /// Build a signature by hand (fresh id), e.g. for validator input.
    #[new]
    #[pyo3(signature = (x, phi_x, delta_x, zk_passed, entropy, references = Vec::new()))]
    fn new(
        x: f64,
        phi_x: f64,
        delta_x: f64,
        zk_passed: bool,
        entropy: f64,
        references: Vec<String>,
    ) -> PyResult<Self> {
        let references = references
            .iter()
            .map(|r| parse_id(r))
            .collect::<PyResult<Vec<_>>>()?;
        Ok(Self {
            inner: Signature::new(x, phi_x, delta_x, zk_passed, entropy, references),
        })
    }

    #[getter]
    fn id(&self) -> String {
        self.inner.id().to_string()
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.x()
    }

    #[getter]
    fn phi_x(&self) -> f64 {
        self.inner.phi_x()
    }

    #[getter]
    fn delta_x(&self) -> f64 {
        self.inner.delta_x()
    }

    #[getter]
    fn zk_passed(&self) -> bool {
        self.inner.zk_passed()
    }

    #[getter]
    fn entropy(&self) -> f64 {
        self.inner.entropy()
    }

    #[getter]
    fn references(&self) -> Vec<String> {
        self.inner.references().iter().map(|r| r.to_string()).collect()
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("id", self.id())?;
        dict.set_item("x", self.inner.x())?;
        dict.set_item("phi_x", self.inner.phi_x())?;
        dict.set_item("delta_x", self.inner.delta_x())?;
        dict.set_item("zk", self.inner.zk_passed())?;
        dict.set_item("entropy", self.inner.entropy())?;
        dict.set_item("refs", self.references())?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "Signature(x={}, phi_x={:.4}, delta_x={:.4}, zk={}, entropy={:.4}, refs={})",
            self.inner.x(),
            self.inner.phi_x(),
            self.inner.delta_x(),
            self.inner.zk_passed(),
            self.inner.entropy(),
            self.inner.references().len(),
        )
    }
}

fn wrap_path(path: Vec<Signature>) -> Vec<PySignature> {
    path.into_iter().map(|inner| PySignature { inner }).collect()
}

// ─── PySignatureDag ─────────────────────────────────────────────────

/// Append-only signature DAG exposed to Python.
#[pyclass(name = "SignatureDag")]
struct PySignatureDag {
    inner: SignatureDag,
}

#[pymethods]
impl PySignatureDag {
    #[new]
    fn new() -> Self {
        Self {
            inner: SignatureDag::new(),
        }
    }

    /// Insert a signature. Raises ValueError on a duplicate id.
    fn add_node(&mut self, signature: PySignature) -> PyResult<()> {
        self.inner
            .add_node(signature.inner.into())
            .map_err(to_py_err)
    }

    /// Compute, store and return the weight of the node with `id`.
    #[pyo3(signature = (id, alpha = 1.0, beta = 1.0, gamma = 1.0))]
    fn compute_weight(&mut self, id: &str, alpha: f64, beta: f64, gamma: f64) -> PyResult<f64> {
        let id = parse_id(id)?;
        self.inner
            .reweigh(id, &WeightScorer::new(alpha, beta, gamma))
            .map_err(to_py_err)
    }

    fn weight(&self, id: &str) -> PyResult<Option<f64>> {
        let id = parse_id(id)?;
        Ok(self.inner.get(id).map(|n| n.weight()))
    }

    fn get(&self, id: &str) -> PyResult<Option<PySignature>> {
        let id = parse_id(id)?;
        Ok(self.inner.get(id).map(|n| PySignature {
            inner: n.signature().clone(),
        }))
    }

    /// Ids of nodes referencing `id`, in insertion order.
    fn referrers(&self, id: &str) -> PyResult<Vec<String>> {
        let id = parse_id(id)?;
        Ok(self.inner.referrers(id).iter().map(|r| r.to_string()).collect())
    }

    fn __contains__(&self, id: &str) -> PyResult<bool> {
        Ok(self.inner.contains(parse_id(id)?))
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SignatureDag(nodes={}, edges={})",
            self.inner.len(),
            self.inner.edge_count()
        )
    }
}

// ─── Functions ──────────────────────────────────────────────────────

/// Seeded (amplitudes, frequencies, phases).
#[pyfunction]
#[pyo3(signature = (seed, k = 10))]
fn generate_parameters(seed: &str, k: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let p = sigkernel_core::generate_parameters(seed, k);
    (p.amplitudes, p.frequencies, p.phases)
}

/// Structure function value at `x`.
#[pyfunction]
#[pyo3(name = "phi")]
fn py_phi(x: f64, a: Vec<f64>, t: Vec<f64>, theta: Vec<f64>) -> PyResult<f64> {
    sigkernel_core::phi(x, &a, &t, &theta).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(name = "delta")]
fn py_delta(phi_x: f64, tau: f64) -> f64 {
    sigkernel_core::delta(phi_x, tau)
}

#[pyfunction]
#[pyo3(signature = (seed, count, tau = 0.5, epsilon = 0.1))]
fn build_signature_path(
    seed: &str,
    count: usize,
    tau: f64,
    epsilon: f64,
) -> PyResult<Vec<PySignature>> {
    sigkernel_core::build_signature_path(seed, count, tau, epsilon)
        .map(wrap_path)
        .map_err(to_py_err)
}

/// False for an empty path.
#[pyfunction]
#[pyo3(signature = (path, entropy_threshold = 1.0))]
fn is_valid_structure_path(path: Vec<PySignature>, entropy_threshold: f64) -> bool {
    let path: Vec<Signature> = path.into_iter().map(|s| s.inner).collect();
    sigkernel_core::is_valid_structure_path(&path, entropy_threshold)
}

#[pyfunction]
#[pyo3(signature = (seed, count = 20, config = None))]
fn simulate_dag(seed: &str, count: usize, config: Option<PyKernelConfig>) -> PyResult<PySignatureDag> {
    let cfg = config.map(|c| c.inner).unwrap_or_default();
    sigkernel_core::simulate_dag(seed, count, &cfg)
        .map(|inner| PySignatureDag { inner })
        .map_err(to_py_err)
}

// ─── Module Registration ────────────────────────────────────────────

#[pymodule]
fn sigkernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKernelConfig>()?;
    m.add_class::<PySignature>()?;
    m.add_class::<PySignatureDag>()?;
    m.add_function(wrap_pyfunction!(generate_parameters, m)?)?;
    m.add_function(wrap_pyfunction!(py_phi, m)?)?;
    m.add_function(wrap_pyfunction!(py_delta, m)?)?;
    m.add_function(wrap_pyfunction!(build_signature_path, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_structure_path, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_dag, m)?)?;
    Ok(())
}
