//! Command handlers. Each submodule exposes a single `execute` function
//! that translates CLI arguments into core calls and displays results.

pub mod completions;
pub mod generate;
pub mod plugins;
pub mod policy;
