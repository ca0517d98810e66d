use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// # Examples
///
/// ```
/// use sluice_core::constraint::NonNegative;
/// use uom::si::{f64::Length, length::meter};
///
/// let opening = NonNegative::new(Length::new::<meter>(0.5)).unwrap();
/// assert_eq!(opening.as_ref().get::<meter>(), 0.5);
///
/// assert!(NonNegative::new(-0.1).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs `Constrained<T, NonNegative>` if `value >= 0`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is below zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    #[test]
    fn accepts_zero_and_positive() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(2.5).is_ok());
        assert!(NonNegative::new(Length::new::<meter>(0.0)).is_ok());
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert_eq!(NonNegative::new(-1.0), Err(ConstraintError::Negative));
        assert_eq!(
            NonNegative::new(Length::new::<meter>(-0.001)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
