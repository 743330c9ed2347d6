//! Key/value tree abstraction
//!
//! The pipeline consumes trees produced by an external KeyValues1 reader.
//! Only the node shape and a handful of lookup and list-parsing helpers live here.

mod node;


pub use node::*;
