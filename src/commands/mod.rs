//! Command implementations for scoop-search CLI

pub mod completions;
pub mod hook;
pub mod search;
