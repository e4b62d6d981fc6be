//! Relative retention lifetimes from binding energies (Arrhenius).
//!
//! Desorption of an adsorbate is an activated process, so its rate falls
//! exponentially with the depth of the binding well and the retention
//! lifetime is proportional to `exp(|E| / RT)`. Comparing two adsorbents at
//! the same temperature cancels the prefactor:
//!
//! ```text
//! τ_candidate / τ_reference = exp((|E_c| - |E_r|) / RT)
//! ```
//!
//! At the 298 K reference temperature this reduces to the decade rule used
//! throughout adsorbent screening: every 5.7 kJ/mol of extra well depth buys
//! one order of magnitude of retention lifetime.
//!
//! The models assume desorption is rate-limiting and the Arrhenius
//! prefactor is comparable between the adsorbents under comparison.

use thiserror::Error;
use uom::si::{
    f64::{MolarEnergy, ThermodynamicTemperature, Time},
    molar_energy::kilojoule_per_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyNegative, StrictlyPositive},
    units::{GAS_CONSTANT_KILOJOULE_PER_MOLE_KELVIN, reference_temperature},
};

/// A binding-energy well depth: favorable binding, so strictly negative.
pub type WellDepth = Constrained<MolarEnergy, StrictlyNegative>;

/// kJ/mol of additional well depth per decade of retention lifetime.
///
/// This is RT·ln(10) at 298 K rounded to the empirical screening value;
/// it is fixed by definition here, not re-derived.
const DECADE_KILOJOULE_PER_MOLE: f64 = 5.7;

/// The decade constant as a molar energy: 5.7 kJ/mol per tenfold lifetime.
pub fn decade_energy() -> MolarEnergy {
    MolarEnergy::new::<kilojoule_per_mole>(DECADE_KILOJOULE_PER_MOLE)
}

/// Errors from evaluating a retention model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RetentionError {
    /// The binding-energy change must be a finite number.
    #[error("binding-energy change must be finite")]
    NonFiniteEnergy,

    /// The temperature must be positive and finite.
    #[error("temperature must be positive")]
    NonPositiveTemperature,
}

/// The lifetime multiplier for a change in well depth, in decade form.
///
/// Computes `10^(Δ / 5.7 kJ/mol)`. A positive Δ (deeper well) extends the
/// lifetime; a negative Δ shortens it. By definition, Δ = 0 gives exactly 1
/// and Δ = 5.7 kJ/mol gives exactly 10.
///
/// # Errors
///
/// Returns [`RetentionError::NonFiniteEnergy`] for NaN or infinite input.
pub fn lifetime_multiplier(delta_well_depth: MolarEnergy) -> Result<f64, RetentionError> {
    let delta = delta_well_depth.get::<kilojoule_per_mole>();
    if !delta.is_finite() {
        return Err(RetentionError::NonFiniteEnergy);
    }
    Ok(10f64.powf(delta / DECADE_KILOJOULE_PER_MOLE))
}

/// The lifetime of a candidate adsorbent relative to a reference, at 298 K.
///
/// Both inputs are validated well depths, so this evaluation is infallible.
/// Values above 1 mean the candidate retains the adsorbate longer.
pub fn relative_lifetime(candidate: WellDepth, reference: WellDepth) -> f64 {
    arrhenius_ratio(candidate, reference, reference_temperature().get::<kelvin>())
}

/// The relative lifetime at a caller-supplied temperature.
///
/// # Errors
///
/// Returns [`RetentionError::NonPositiveTemperature`] for a temperature at
/// or below absolute zero (or NaN).
pub fn relative_lifetime_at(
    candidate: WellDepth,
    reference: WellDepth,
    temperature: ThermodynamicTemperature,
) -> Result<f64, RetentionError> {
    let t = temperature.get::<kelvin>();
    if t.is_nan() || t <= 0.0 {
        return Err(RetentionError::NonPositiveTemperature);
    }
    Ok(arrhenius_ratio(candidate, reference, t))
}

/// Scales a reference breakthrough time by the relative lifetime at 298 K.
///
/// The reference time is whatever breakthrough the reference adsorbent
/// shows under the stressed conditions of interest; the estimate inherits
/// all of that measurement's caveats.
pub fn breakthrough_estimate(
    candidate: WellDepth,
    reference: WellDepth,
    reference_breakthrough: Constrained<Time, StrictlyPositive>,
) -> Time {
    reference_breakthrough.into_inner() * relative_lifetime(candidate, reference)
}

fn arrhenius_ratio(candidate: WellDepth, reference: WellDepth, temperature_kelvin: f64) -> f64 {
    let depth_gain = candidate.into_inner().get::<kilojoule_per_mole>().abs()
        - reference.into_inner().get::<kilojoule_per_mole>().abs();
    (depth_gain / (GAS_CONSTANT_KILOJOULE_PER_MOLE_KELVIN * temperature_kelvin)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::hour;

    fn well_depth(kilojoules_per_mole: f64) -> WellDepth {
        StrictlyNegative::new(MolarEnergy::new::<kilojoule_per_mole>(kilojoules_per_mole)).unwrap()
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn no_change_means_no_extension() {
        let factor = lifetime_multiplier(MolarEnergy::new::<kilojoule_per_mole>(0.0)).unwrap();
        assert_eq!(factor, 1.0);
    }

    #[test]
    fn one_decade_constant_is_tenfold() {
        let factor = lifetime_multiplier(decade_energy()).unwrap();
        assert_relative_eq!(factor, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn shallower_well_shortens_lifetime() {
        let delta = MolarEnergy::new::<kilojoule_per_mole>(-5.7);
        assert_relative_eq!(lifetime_multiplier(delta).unwrap(), 0.1, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_finite_input() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                lifetime_multiplier(MolarEnergy::new::<kilojoule_per_mole>(bad)),
                Err(RetentionError::NonFiniteEnergy)
            );
        }
    }

    #[test]
    fn decade_rule_matches_arrhenius_within_rounding() {
        // 5.7 kJ/mol is RT ln(10) at 298 K rounded, so the two forms agree
        // to better than 1%.
        let factor = relative_lifetime(well_depth(-50.7), well_depth(-45.0));
        assert_relative_eq!(factor, 10.0, max_relative = 0.01);
    }

    #[test]
    fn ion_exchange_versus_activated_carbon() {
        // IX at -60 kJ/mol vs GAC at -45 kJ/mol: roughly 430x retention.
        let factor = relative_lifetime(well_depth(-60.0), well_depth(-45.0));
        assert_relative_eq!(factor, 425.9, max_relative = 1e-3);
    }

    #[test]
    fn weaker_candidate_falls_below_unity() {
        let factor = relative_lifetime(well_depth(-45.0), well_depth(-60.0));
        assert!(factor < 1.0);
    }

    #[test]
    fn hotter_beds_leach_sooner() {
        let candidate = well_depth(-85.0);
        let reference = well_depth(-45.0);
        let ambient = relative_lifetime(candidate, reference);
        let hot = relative_lifetime_at(
            candidate,
            reference,
            ThermodynamicTemperature::new::<kelvin>(350.0),
        )
        .unwrap();
        assert!(hot < ambient);
    }

    #[test]
    fn rejects_non_positive_temperature() {
        for bad in [0.0, -1.0, f64::NAN] {
            assert_eq!(
                relative_lifetime_at(
                    well_depth(-60.0),
                    well_depth(-45.0),
                    ThermodynamicTemperature::new::<kelvin>(bad),
                ),
                Err(RetentionError::NonPositiveTemperature)
            );
        }
    }

    #[test]
    fn breakthrough_scales_the_reference_time() {
        let reference_breakthrough =
            StrictlyPositive::new(Time::new::<hour>(48.0)).unwrap();

        // Identical adsorbents: the estimate is the reference itself.
        let same = breakthrough_estimate(
            well_depth(-45.0),
            well_depth(-45.0),
            reference_breakthrough,
        );
        assert_relative_eq!(same.get::<hour>(), 48.0);

        // A deeper well extends it.
        let extended = breakthrough_estimate(
            well_depth(-60.0),
            well_depth(-45.0),
            reference_breakthrough,
        );
        assert!(extended.get::<hour>() > 48.0 * 400.0);
    }
}
