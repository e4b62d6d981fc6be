use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly negative (less than zero).
///
/// Use this type with [`Constrained<T, StrictlyNegative>`] to encode strict
/// negativity at the type level. Adsorbent binding energies follow the
/// convention that favorable binding is negative, so well depths in this
/// crate carry this constraint.
///
/// You can construct a value constrained to be strictly negative using
/// either the generic [`Constrained::new`] method or the convenient
/// [`StrictlyNegative::new`] associated function.
///
/// # Examples
///
/// ```
/// use extraction_models::support::constraint::{Constrained, StrictlyNegative};
///
/// // Generic constructor:
/// let x = Constrained::<_, StrictlyNegative>::new(-1).unwrap();
/// assert_eq!(x.into_inner(), -1);
///
/// // Associated constructor:
/// let well_depth = StrictlyNegative::new(-45.0).unwrap();
/// assert_eq!(well_depth.into_inner(), -45.0);
///
/// // Error cases:
/// assert!(StrictlyNegative::new(0).is_err());
/// assert!(StrictlyNegative::new(3).is_err());
/// assert!(StrictlyNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyNegative;

impl StrictlyNegative {
    /// Constructs a [`Constrained<T, StrictlyNegative>`] if the value is strictly negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, positive, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyNegative>, ConstraintError> {
        Constrained::<T, StrictlyNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Greater) => Err(ConstraintError::Positive),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
