use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

#[pyfunction]
fn translate(message: &str) -> String { crate::translate(message) }

#[pyfunction]
fn translate_rule(rule: &str, message: &str) -> PyResult<String> {
    let rule: crate::Rule = rule.parse().map_err(PyValueError::new_err)?;
    Ok(rule.apply(message))
}

/// Raise a pending Lantern error as `RuntimeError`, translated. `None` does nothing.
#[pyfunction]
#[pyo3(signature = (message=None))]
fn raise_native_error(message: Option<&str>) -> PyResult<()> {
    match message {
        None => Ok(()),
        Some(m) => Err(PyRuntimeError::new_err(crate::translate(m))),
    }
}

#[pymodule]
fn lantern_bridge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(translate, m)?)?;
    m.add_function(wrap_pyfunction!(translate_rule, m)?)?;
    m.add_function(wrap_pyfunction!(raise_native_error, m)?)?;
    Ok(())
}
