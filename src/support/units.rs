//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (purity ratios,
//! binding energies, temperatures, breakthrough times). This module provides
//! extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Hartree energies
//!
//! Quantum-chemistry codes report energies in Hartree, and [`uom`] has no
//! atomic-unit support for molar energies. The [`HartreeEnergy`] trait
//! converts to and from kJ/mol via the fixed factor 1 Ha = 2625.5 kJ/mol:
//!
//! ```
//! use extraction_models::support::units::HartreeEnergy;
//! use uom::si::f64::MolarEnergy;
//! use uom::si::molar_energy::kilojoule_per_mole;
//!
//! let e = MolarEnergy::from_hartree(1.0);
//! assert_eq!(e.get::<kilojoule_per_mole>(), 2625.5);
//! ```

use uom::si::{
    f64::{MolarEnergy, ThermodynamicTemperature},
    molar_energy::kilojoule_per_mole,
    thermodynamic_temperature::kelvin,
};

/// Molar gas constant, kJ/(mol·K).
///
/// Kept as a scalar because the models do their exponent arithmetic in
/// kJ/mol space after extracting raw values from [`uom`] quantities.
pub const GAS_CONSTANT_KILOJOULE_PER_MOLE_KELVIN: f64 = 8.314e-3;

/// One Hartree expressed in kJ/mol.
pub const KILOJOULE_PER_MOLE_PER_HARTREE: f64 = 2625.5;

/// The reference temperature for screening comparisons: 298 K (25 °C).
///
/// Literature separation factors and the 5.7 kJ/mol lifetime decade
/// constant are both quoted at this temperature.
pub fn reference_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(298.0)
}

/// Conversion between Hartree and molar energies.
///
/// This extension trait is needed because [`uom`] does not define the
/// Hartree as a molar-energy unit.
pub trait HartreeEnergy {
    /// Builds a molar energy from a value in Hartree.
    fn from_hartree(value: f64) -> Self;

    /// Returns this energy expressed in Hartree.
    fn to_hartree(&self) -> f64;
}

impl HartreeEnergy for MolarEnergy {
    fn from_hartree(value: f64) -> Self {
        MolarEnergy::new::<kilojoule_per_mole>(value * KILOJOULE_PER_MOLE_PER_HARTREE)
    }

    fn to_hartree(&self) -> f64 {
        self.get::<kilojoule_per_mole>() / KILOJOULE_PER_MOLE_PER_HARTREE
    }
}
