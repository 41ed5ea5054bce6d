//! ui
//!
//! User-facing output: verbosity-gated printing and set formatting.

pub mod output;
