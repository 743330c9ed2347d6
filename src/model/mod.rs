//! Resolved domain records
//!
//! Everything the pipeline hands to the persistence collaborator.

mod ability;
mod hero;
mod item;
mod patch;
mod record;
mod values;

pub use ability::*;
pub use hero::*;
pub use item::*;
pub use patch::*;
pub use record::*;
pub use values::*;
