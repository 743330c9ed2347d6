//! Token store module
//!
//! Per-language string dictionaries (ability tooltips, general/hero tokens,
//! hero lore, patch notes) with default-language fallback.

mod store;
mod table;


pub use store::*;
pub use table::*;
