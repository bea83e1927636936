//! Helpers shared between the crates of this workspace.

pub mod macros;
