//! Identifier map module

mod map;

pub use map::*;
