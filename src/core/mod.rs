//! core
//!
//! Domain logic for evensum.
//!
//! # Modules
//!
//! - [`integral`] - The `Integral` capability and the bounded sum
//! - [`seq`] - Lazy and eager sequence transforms
//! - [`pipeline`] - Stage composition and the rendered report
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Transforms are pure and never mutate their input
//! - Non-integral element types are rejected at compile time

pub mod config;
pub mod integral;
pub mod pipeline;
pub mod seq;
