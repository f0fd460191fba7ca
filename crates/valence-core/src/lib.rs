//! # Valence Core Library
//!
//! Energy and analytic gradient evaluation for the bonded ("valence") part of a
//! molecular-mechanics force field, expressed over pre-computed internal coordinates.
//!
//! ## Architectural Philosophy
//!
//! The library follows the same three-layer split used throughout the workspace:
//!
//! - **[`core`]: The Foundation.** Plain data records (`InternalCoordinate`,
//!   `ValenceTerm`), the closed set of functional forms (`potentials`) with their
//!   dispatch, and table/frame I/O.
//!
//! - **[`engine`]: The Kernel.** The forward pass (energies) and the backward pass
//!   (gradient accumulation), serial and parallel, plus evaluation configuration.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on the engine, such as
//!   finite-difference gradient verification and evaluation over coordinate frames.
//!
//! Internal-coordinate values come from an external geometry layer; this crate only
//! reads them and accumulates `∂E/∂value` back into the same records.

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::models::coordinate::InternalCoordinate;
pub use crate::core::models::term::{TermKind, ValenceTerm};
pub use crate::engine::backward::accumulate_gradients;
pub use crate::engine::forward::evaluate_energy;
pub use crate::engine::list::ValenceList;
