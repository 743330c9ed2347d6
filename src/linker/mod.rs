//! Cross-reference linker module
//!
//! Attaches abilities and positioned talents to heroes and resolves talent
//! text against the abilities that reference each talent.

mod hero;
mod talent;

pub use hero::*;
pub use talent::*;
