use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// # Examples
///
/// ```
/// use sluice_core::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(9.81).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if `value > 0`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is below zero.
    /// - [`ConstraintError::Zero`] if the value equals zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{acceleration::meter_per_second_squared, f64::Acceleration};

    #[test]
    fn accepts_positive() {
        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert!(StrictlyPositive::new(Acceleration::new::<meter_per_second_squared>(9.81)).is_ok());
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-3.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
