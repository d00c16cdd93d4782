//! Miller Core - Core library for crystallographic notation parsing
//!
//! This crate provides the parser for Miller index notation: parenthesized
//! strings like `(100)` denote lattice planes and bracketed strings like
//! `[111]` denote lattice directions. Plane results additionally carry
//! per-axis intercepts derived from the indices for visualization.

pub mod config;
pub mod error;
pub mod notation;

pub use config::Config;
pub use error::{Error, ParseError, Result};
pub use notation::{parse, Notation};
