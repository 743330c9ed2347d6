//! Entity builder module
//!
//! Turns raw ability, hero and item trees into language-specific records.
//! A failing entity is dropped and reported; its siblings still build.

mod ability;
mod common;
mod context;
mod hero;
mod item;


pub use ability::*;
pub use common::*;
pub use context::*;
pub use hero::*;
pub use item::*;
