//! Patch-note composer module
//!
//! Resolves note references through the patch dictionary, merges duplicate
//! item entries and files ability notes under their heroes.

mod composer;
mod names;

pub use composer::*;
pub use names::*;
