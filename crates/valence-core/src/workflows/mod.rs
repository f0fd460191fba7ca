//! # Workflows Module
//!
//! Complete procedures built on top of the engine passes.
//!
//! - [`gradient_check`] - verifies every term's analytic derivatives against central
//!   finite differences of its energy
//! - [`frames`] - evaluates energies and gradients over a sequence of coordinate frames

pub mod frames;
pub mod gradient_check;
