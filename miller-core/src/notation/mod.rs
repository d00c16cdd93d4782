//! Miller index notation parsing
//!
//! This module handles classification and decomposition of notation
//! strings like `(100)` (plane) and `[111]` (direction).

mod parser;

pub use parser::{parse, Notation};
