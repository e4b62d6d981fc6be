//! Countercurrent solvent-extraction models.
//!
//! [`cascade`] answers the plant-design question: given an extractant with
//! separation factor β, how many equilibrium stages does a countercurrent
//! cascade need to lift a feed to a target purity?
//!
//! [`selectivity`] works the other direction: given a differential binding
//! energy from a DFT screening, what separation factor does thermodynamics
//! allow?

pub mod cascade;
pub mod selectivity;
