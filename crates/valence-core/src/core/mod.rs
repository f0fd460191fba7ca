//! # Core Module
//!
//! Data records and functional forms shared by every other layer.
//!
//! - **Records** ([`models`]) - internal coordinates and valence terms
//! - **Functional forms** ([`forcefield`]) - the seven energy expressions, their
//!   derivatives, the kind dispatch and per-kind energy bookkeeping
//! - **File I/O** ([`io`]) - table snapshots (TOML) and coordinate frames (CSV)

pub mod forcefield;
pub mod io;
pub mod models;
