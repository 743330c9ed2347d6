//! Dota Resolve Core - Entity and patch-note resolution pipeline
//!
//! This crate turns parsed KeyValues trees of Dota 2 game data (abilities,
//! heroes, items, patch manifests) into localized, template-expanded records
//! keyed by deterministic ids. Python bindings are available behind the
//! `python` feature.

pub mod builder;
pub mod config;
pub mod error;
pub mod ids;
pub mod kv;
pub mod linker;
pub mod model;
pub mod patch;
pub mod patterns;
pub mod pipeline;
pub mod tokens;
pub mod values;

#[cfg(feature = "python")]
mod bindings;

pub use error::{ResolveError, Result};
pub use model::hash_id;
pub use pipeline::{Pipeline, PipelineInput, PipelineOutput};
