//! Python extension module, built with `--features python`.

use pyo3::prelude::*;

/// Toy Tetragraph Hash of a string, as four letters.
#[pyfunction]
#[pyo3(name = "tth")]
fn py_tth(message: &str) -> String {
    crate::tth_hash(message)
}

/// Uppercase ASCII letters of a string, everything else dropped.
#[pyfunction]
#[pyo3(name = "sanitize")]
fn py_sanitize(message: &str) -> String {
    crate::sanitize(message)
}

#[pymodule]
fn tth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_tth, m)?)?;
    m.add_function(wrap_pyfunction!(py_sanitize, m)?)?;
    Ok(())
}
