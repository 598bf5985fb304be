//! Cargo weight value object for transfers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FleetError;

/// A whole, non-negative cargo weight in tonnes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CargoWeight(u32);

impl CargoWeight {
    pub const ZERO: Self = Self(0);

    pub fn new(tonnes: u32) -> Self {
        Self(tonnes)
    }

    /// Validate a raw, possibly absent numeric weight.
    ///
    /// # Errors
    ///
    /// - `FleetError::MissingArgument` when no weight was supplied
    /// - `FleetError::InvalidArgument` when the weight is negative,
    ///   fractional, not finite, or larger than `u32::MAX`
    ///
    /// # Example
    ///
    /// ```
    /// use cargofleet_domain::value_objects::CargoWeight;
    ///
    /// assert_eq!(CargoWeight::from_input(Some(300.0)).unwrap().tonnes(), 300);
    /// assert!(CargoWeight::from_input(None).is_err());
    /// ```
    pub fn from_input(raw: Option<f64>) -> Result<Self, FleetError> {
        let value = raw.ok_or_else(|| FleetError::missing_argument("Cargo weight is required"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(FleetError::invalid_argument(format!(
                "Cargo weight must be a non-negative number, got {}",
                value
            )));
        }
        if value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(FleetError::invalid_argument(format!(
                "Cargo weight must be a whole number of tonnes up to {}, got {}",
                u32::MAX,
                value
            )));
        }
        // Range and integrality were checked above.
        Ok(Self(value as u32))
    }

    #[inline]
    pub fn tonnes(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CargoWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}t", self.0)
    }
}

impl From<u32> for CargoWeight {
    fn from(tonnes: u32) -> Self {
        Self(tonnes)
    }
}

impl From<CargoWeight> for u32 {
    fn from(weight: CargoWeight) -> Self {
        weight.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FleetErrorKind;

    #[test]
    fn test_from_input_whole_number() {
        assert_eq!(CargoWeight::from_input(Some(300.0)), Ok(CargoWeight::new(300)));
        assert_eq!(CargoWeight::from_input(Some(0.0)), Ok(CargoWeight::ZERO));
    }

    #[test]
    fn test_from_input_missing() {
        let err = CargoWeight::from_input(None).unwrap_err();
        assert_eq!(err.kind(), FleetErrorKind::MissingArgument);
    }

    #[test]
    fn test_from_input_negative() {
        let err = CargoWeight::from_input(Some(-5.0)).unwrap_err();
        assert_eq!(err.kind(), FleetErrorKind::InvalidArgument);
    }

    #[test]
    fn test_from_input_fractional_or_non_finite() {
        assert!(CargoWeight::from_input(Some(1.5)).is_err());
        assert!(CargoWeight::from_input(Some(f64::NAN)).is_err());
        assert!(CargoWeight::from_input(Some(f64::INFINITY)).is_err());
        assert!(CargoWeight::from_input(Some(f64::from(u32::MAX) + 1.0)).is_err());
    }

    #[test]
    fn test_display_and_conversions() {
        let w = CargoWeight::from(42_u32);
        assert_eq!(w.to_string(), "42t");
        assert_eq!(u32::from(w), 42);
        assert!(CargoWeight::ZERO.is_zero());
        assert!(!w.is_zero());
    }
}
