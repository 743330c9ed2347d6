//! Value resolver module
//!
//! Extracts and classifies special values, applies scepter/shard upgrades and
//! substitutes values into ability, item and talent text.

mod extract;
mod format;
mod resolve;
mod template;
mod upgrade;

#[cfg(test)]
mod property_tests;

pub use extract::*;
pub use format::*;
pub use resolve::*;
pub use template::*;
pub use upgrade::*;
