//! Blogpack: exercise workspace to markdown document
//!
//! Scans a workspace directory for labeled exercise entries (`ExNN.cpp` files
//! and `ExNN*/` folders), orders them by exercise number, and concatenates
//! their contents into a single markdown document with one syntax-highlighted
//! code block per entry.

pub mod cli;
pub mod content;
pub mod document;
pub mod error;
pub mod logging;
pub mod render;
pub mod scan;
