//! # Engine Module
//!
//! The forward and backward passes over a term table and a coordinate table.
//!
//! - [`forward`] - per-term energies and their total
//! - [`backward`] - accumulation of `∂E/∂value` into the coordinate records
//! - [`list`] - [`ValenceList`](list::ValenceList), the owned term table
//! - [`evaluator`] - strategy selection between the serial and parallel passes
//! - [`config`], [`error`], [`progress`] - configuration, errors and progress reporting
//!
//! The serial passes are allocation-free and never reset the gradient accumulators, so
//! several gradient sources can add into the same coordinate table.

pub mod backward;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod forward;
pub mod list;
pub mod progress;
