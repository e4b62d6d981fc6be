//! # Extraction Models
//!
//! Screening-level models for separation process claims: countercurrent
//! cascade stage counts from separation factors, and adsorbent retention
//! lifetimes from binding energies.
//!
//! ## Crate layout
//!
//! - [`models`]: The physical models, organized by separation domain.
//! - [`report`]: Text-table audit reports built on the models.
//! - [`chart`]: Static figure generation for the audit binaries.
//! - [`support`]: Constraint types and unit helpers used by models.
//!
//! ## Scope
//!
//! Every model here is a closed-form screening estimate, not a process
//! simulation. The inputs are literature or DFT numbers and the outputs are
//! the figures a feasibility audit would quote: stage counts, lifetime
//! multipliers, breakthrough estimates. Validation happens at construction
//! through the types in [`support::constraint`], so evaluation never has to
//! handle out-of-domain values.

pub mod chart;
pub mod models;
pub mod report;
pub mod support;
