//! Theoretical selectivity from binding-energy differences.
//!
//! A DFT screening reports the differential binding energy ΔΔE between a
//! target ion and its main impurity on a candidate extractant. The Boltzmann
//! relation turns that into a separation factor:
//!
//! ```text
//! β = exp(ΔΔE / RT)
//! ```
//!
//! Electronic binding energies approximate the free energy of binding with
//! entropic contributions neglected, so the result is an upper bound. Real
//! cascades also face mass-transfer kinetics, stage efficiency, and solvent
//! entrainment; published screening numbers cap the factor well below this
//! bound before feeding it into a cascade design.

use thiserror::Error;
use uom::si::{
    f64::{MolarEnergy, Ratio, ThermodynamicTemperature},
    molar_energy::kilojoule_per_mole,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{GAS_CONSTANT_KILOJOULE_PER_MOLE_KELVIN, reference_temperature};

/// Errors from evaluating the Boltzmann selectivity estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectivityError {
    /// The binding-energy difference must be a finite number.
    #[error("binding-energy difference must be finite")]
    NonFiniteEnergy,

    /// The temperature must be positive and finite.
    #[error("temperature must be positive")]
    NonPositiveTemperature,
}

/// The theoretical separation factor at the 298 K reference temperature.
///
/// A positive ΔΔE means the target binds more strongly than the impurity
/// and gives β > 1; a negative ΔΔE gives β < 1.
///
/// # Errors
///
/// Returns [`SelectivityError::NonFiniteEnergy`] for NaN or infinite input.
pub fn separation_factor(delta_binding: MolarEnergy) -> Result<Ratio, SelectivityError> {
    separation_factor_at(delta_binding, reference_temperature())
}

/// The theoretical separation factor at a caller-supplied temperature.
///
/// # Errors
///
/// Returns [`SelectivityError::NonFiniteEnergy`] for a non-finite energy
/// difference, or [`SelectivityError::NonPositiveTemperature`] for a
/// temperature at or below absolute zero (or NaN).
pub fn separation_factor_at(
    delta_binding: MolarEnergy,
    temperature: ThermodynamicTemperature,
) -> Result<Ratio, SelectivityError> {
    let delta = delta_binding.get::<kilojoule_per_mole>();
    if !delta.is_finite() {
        return Err(SelectivityError::NonFiniteEnergy);
    }

    let t = temperature.get::<kelvin>();
    if t.is_nan() || t <= 0.0 {
        return Err(SelectivityError::NonPositiveTemperature);
    }

    let exponent = delta / (GAS_CONSTANT_KILOJOULE_PER_MOLE_KELVIN * t);
    Ok(Ratio::new::<ratio>(exponent.exp()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_difference_means_no_selectivity() {
        let beta = separation_factor(MolarEnergy::new::<kilojoule_per_mole>(0.0)).unwrap();
        assert_eq!(beta.get::<ratio>(), 1.0);
    }

    #[test]
    fn fifty_kilojoules_gives_half_billion_fold_selectivity() {
        // The screening rule of thumb: ΔΔE > 50 kJ/mol puts β near 6e8.
        let beta = separation_factor(MolarEnergy::new::<kilojoule_per_mole>(50.0)).unwrap();
        let beta = beta.get::<ratio>();
        assert!(beta > 5.0e8 && beta < 6.5e8, "unexpected beta: {beta:.3e}");
        assert_relative_eq!(beta.ln(), 20.181, max_relative = 1e-4);
    }

    #[test]
    fn weaker_target_binding_gives_sub_unity_factor() {
        let beta = separation_factor(MolarEnergy::new::<kilojoule_per_mole>(-10.0)).unwrap();
        assert!(beta.get::<ratio>() < 1.0);
    }

    #[test]
    fn hotter_systems_are_less_selective() {
        let delta = MolarEnergy::new::<kilojoule_per_mole>(50.0);
        let cold = separation_factor_at(delta, ThermodynamicTemperature::new::<kelvin>(298.0));
        let hot = separation_factor_at(delta, ThermodynamicTemperature::new::<kelvin>(350.0));
        assert!(hot.unwrap() < cold.unwrap());
    }

    #[test]
    fn rejects_non_finite_energy() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                separation_factor(MolarEnergy::new::<kilojoule_per_mole>(bad)),
                Err(SelectivityError::NonFiniteEnergy)
            );
        }
    }

    #[test]
    fn rejects_non_positive_temperature() {
        let delta = MolarEnergy::new::<kilojoule_per_mole>(50.0);
        for bad in [0.0, -10.0, f64::NAN] {
            assert_eq!(
                separation_factor_at(delta, ThermodynamicTemperature::new::<kelvin>(bad)),
                Err(SelectivityError::NonPositiveTemperature)
            );
        }
    }
}
