//! Configuration module
//!
//! Run-wide settings: default language, language to locale fan-out, number
//! formatting and the talent tree layout.

mod layout;
mod pipeline;

pub use layout::*;
pub use pipeline::*;
