//! Presentation layer
//!
//! Turns search results into the text printed on stdout. Nothing in here touches
//! the file system or the terminal directly, callers decide where the text goes.

pub mod report;

pub use report::render;
