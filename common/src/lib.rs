//! Shared building blocks for the propr workspace: run configuration,
//! the investment input model, and line-oriented input primitives.

pub mod config;
pub mod input;
pub mod investment;

mod macros;
