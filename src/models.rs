//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules based on an
//! opinionated taxonomy:
//!
//! - [`extraction`]: Countercurrent solvent-extraction cascades.
//! - [`adsorption`]: Adsorbent retention and breakthrough screening.
//!
//! # Model structure
//!
//! Each model is a closed-form expression evaluated over validated inputs.
//! Construction of the input types performs all domain validation, so
//! evaluation itself is infallible and deterministic: no iteration, no
//! shared state, no I/O.

pub mod adsorption;
pub mod extraction;
