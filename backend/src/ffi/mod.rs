//! Python bindings (feature `pyo3`)

pub mod generator;
