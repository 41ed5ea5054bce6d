//! evensum - Keep the even numbers, square them, and sum the squares
//!
//! A small pipeline over a list of integers: filter the even elements,
//! square them, and reduce the squares to a total, printing every stage.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - The `Integral` bound, sequence transforms, pipeline, config
//! - [`ui`] - Output formatting and verbosity
//!
//! # Invariants
//!
//! 1. Transforms return new sequences and never mutate their input
//! 2. Order is preserved by every stage
//! 3. The sum accepts integral element types only, checked at compile time
//! 4. Stdout carries only the report; diagnostics go to stderr

pub mod cli;
pub mod core;
pub mod ui;
