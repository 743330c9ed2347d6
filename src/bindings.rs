//! Python bindings
//!
//! The pipeline (configuration, token store, identifier map) is cached once via
//! `init_pipeline`; every `resolve` call then only decodes the definition trees.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline::{Pipeline, PipelineInput, PipelineSources};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::prelude::*;
use std::sync::Arc;

// ============================================================================
// Cached Pipeline
// ============================================================================

/// Global cached pipeline
static CACHED_PIPELINE: OnceCell<Arc<RwLock<Pipeline>>> = OnceCell::new();

// ============================================================================
// Helper Functions
// ============================================================================

fn cached_pipeline() -> PyResult<Arc<RwLock<Pipeline>>> {
    CACHED_PIPELINE
        .get()
        .cloned()
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                "Pipeline not initialized. Call init_pipeline() first.",
            )
        })
}

/// Decode input trees, run, encode the output
fn resolve_json(pipeline: &Pipeline, input_json: &str) -> Result<String> {
    let input: PipelineInput = serde_json::from_str(input_json)?;
    let output = pipeline.run(&input);
    Ok(serde_json::to_string(&output)?)
}

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the pipeline (call once per data refresh)
///
/// # Arguments
/// * `sources_json` - `{"tokens": {language: {abilities, general, lore, patch}}, "ids": <tree>}`
/// * `config_json` - Optional `PipelineConfig`; defaults to English only
///
/// # Raises
/// ValueError if the configuration, token trees or id table are invalid
#[pyfunction]
#[pyo3(signature = (sources_json, config_json=None))]
fn init_pipeline(sources_json: &str, config_json: Option<&str>) -> PyResult<()> {
    let config = match config_json {
        Some(json) => PipelineConfig::from_json_str(json)?,
        None => PipelineConfig::default(),
    };
    let sources: PipelineSources =
        serde_json::from_str(sources_json).map_err(crate::error::ResolveError::from)?;
    let pipeline = Pipeline::from_sources(config, &sources)?;

    // Replace in place when already initialized
    if let Some(existing) = CACHED_PIPELINE.get() {
        *existing.write() = pipeline;
    } else {
        let _ = CACHED_PIPELINE.set(Arc::new(RwLock::new(pipeline)));
    }
    Ok(())
}

/// Check if the pipeline is initialized
#[pyfunction]
fn is_pipeline_initialized() -> bool {
    CACHED_PIPELINE.get().is_some()
}

/// Resolve one set of definition trees
///
/// # Arguments
/// * `input_json` - `{"abilities", "heroes", "items", "neutral_items"?, "patches"?}`
///
/// # Returns
/// JSON with per-locale `abilities`, `talents`, `heroes`, `items`,
/// `patch_notes` and the dropped-entity `failures`
#[pyfunction]
fn resolve(input_json: &str) -> PyResult<String> {
    let pipeline_arc = cached_pipeline()?;
    let pipeline = pipeline_arc.read();
    Ok(resolve_json(&pipeline, input_json)?)
}

/// Resolve asynchronously on a Tokio blocking thread
///
/// # Example (Python)
/// ```python
/// output = json.loads(await resolve_async(input_json))
/// ```
#[pyfunction]
fn resolve_async(py: Python<'_>, input_json: String) -> PyResult<Bound<'_, PyAny>> {
    let pipeline_arc = cached_pipeline()?;

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let output = tokio::task::spawn_blocking(move || {
            let pipeline = pipeline_arc.read();
            resolve_json(&pipeline, &input_json).map_err(PyErr::from)
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Resolution task panicked: {}",
                e
            ))
        })??;

        Ok(output)
    })
}

/// Deterministic record id for `(entity_id, internal_name, locale)`
#[pyfunction]
fn hash_id(entity_id: i64, internal_name: &str, locale: &str) -> u64 {
    crate::model::hash_id(entity_id, internal_name, locale)
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn dota_resolve_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_pipeline, m)?)?;
    m.add_function(wrap_pyfunction!(is_pipeline_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(resolve, m)?)?;
    m.add_function(wrap_pyfunction!(resolve_async, m)?)?;
    m.add_function(wrap_pyfunction!(hash_id, m)?)?;
    Ok(())
}
