//! Pipeline runner module
//!
//! Orchestrates building, resolving, linking and patch composition for every
//! configured language, then stamps records with per-locale ids.

mod input;
mod runner;


pub use input::*;
pub use runner::*;
