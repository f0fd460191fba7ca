//! # Force Field Module
//!
//! The closed library of valence functional forms.
//!
//! ## Key Components
//!
//! - [`potentials`] - pure energy and derivative functions, one pair per kind
//! - [`dispatch`] - maps a [`TermKind`](crate::core::models::term::TermKind) to its pair
//!   and applies it to a term and a coordinate table
//! - [`term`] - per-kind energy bookkeeping
//!
//! Every energy function has a matching derivative; the two halves of a pair must be
//! exact analytic counterparts, which the tests check by central finite differences.

pub(crate) mod dispatch;
pub mod potentials;
pub mod term;
