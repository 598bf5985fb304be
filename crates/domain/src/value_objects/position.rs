//! Position value object - a point in the two-dimensional star map

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FleetError;

/// A point on the star map.
///
/// Both components are always finite. Rendered as `x,y` using the shortest
/// decimal form of each component (`5,5`, `-1.5,20`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "PositionRecord")]
pub struct Position {
    x: f64,
    y: f64,
}

/// Unchecked serialized form, validated through `TryFrom`.
#[derive(Deserialize)]
struct PositionRecord {
    x: f64,
    y: f64,
}

impl TryFrom<PositionRecord> for Position {
    type Error = FleetError;

    fn try_from(record: PositionRecord) -> Result<Self, Self::Error> {
        Self::new(record.x, record.y)
    }
}

impl Position {
    /// Create a position from two coordinates.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::InvalidArgument` if either coordinate is NaN or
    /// infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use cargofleet_domain::value_objects::Position;
    ///
    /// assert_eq!(Position::new(5.0, 5.0).unwrap().to_string(), "5,5");
    /// assert!(Position::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64) -> Result<Self, FleetError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(FleetError::invalid_argument(
                "Coordinates must be finite numbers",
            ));
        }
        Ok(Self { x, y })
    }

    /// The origin `(0,0)`.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Build a position from a raw coordinate list.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::InvalidArgument` unless `coordinates` holds
    /// exactly two finite numbers.
    ///
    /// # Example
    ///
    /// ```
    /// use cargofleet_domain::value_objects::Position;
    ///
    /// let p = Position::from_coordinates(&[50.0, 20.0]).unwrap();
    /// assert_eq!(p.to_string(), "50,20");
    /// assert!(Position::from_coordinates(&[1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_coordinates(coordinates: &[f64]) -> Result<Self, FleetError> {
        match coordinates {
            [x, y] => Self::new(*x, *y),
            other => Err(FleetError::invalid_argument(format!(
                "Coordinates must be a pair, got {} component(s)",
                other.len()
            ))),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the coordinates as an `[x, y]` array.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl TryFrom<[f64; 2]> for Position {
    type Error = FleetError;

    fn try_from([x, y]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl TryFrom<&[f64]> for Position {
    type Error = FleetError;

    fn try_from(coordinates: &[f64]) -> Result<Self, Self::Error> {
        Self::from_coordinates(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FleetErrorKind;

    #[test]
    fn default_is_origin() {
        assert_eq!(Position::default(), Position::new(0.0, 0.0).expect("finite"));
        assert_eq!(Position::origin().to_string(), "0,0");
    }

    #[test]
    fn display_joins_with_comma() {
        assert_eq!(Position::new(5.0, 5.0).expect("finite").to_string(), "5,5");
        assert_eq!(Position::new(-1.5, 20.0).expect("finite").to_string(), "-1.5,20");
    }

    #[test]
    fn from_coordinates_accepts_pairs() {
        let p = Position::from_coordinates(&[3.0, 4.0]).expect("pair");
        assert_eq!(p.x(), 3.0);
        assert_eq!(p.y(), 4.0);
        assert_eq!(p.to_array(), [3.0, 4.0]);
    }

    #[test]
    fn from_coordinates_rejects_wrong_arity() {
        for coords in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..]] {
            let err = Position::from_coordinates(coords).unwrap_err();
            assert_eq!(err.kind(), FleetErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn from_coordinates_rejects_non_finite() {
        assert!(Position::from_coordinates(&[f64::NAN, 0.0]).is_err());
        assert!(Position::from_coordinates(&[0.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn new_rejects_non_finite_components() {
        for (x, y) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 1.0)] {
            let err = Position::new(x, y).unwrap_err();
            assert_eq!(err.kind(), FleetErrorKind::InvalidArgument);
        }
        assert!(Position::try_from([f64::NAN, f64::NAN]).is_err());
    }

    #[test]
    fn serde_round_trips_finite_points() {
        let p = Position::new(-1.5, 20.0).expect("finite");
        let json = serde_json::to_string(&p).expect("serialize");
        assert_eq!(json, r#"{"x":-1.5,"y":20.0}"#);

        let restored: Position = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, p);
    }

    #[test]
    fn serde_rejects_missing_component() {
        let result: Result<Position, _> = serde_json::from_str(r#"{"x":1.0,"y":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn try_from_slice_matches_from_coordinates() {
        let coords: &[f64] = &[7.0, 8.0];
        assert_eq!(Position::try_from(coords), Ok(Position::new(7.0, 8.0).expect("finite")));
    }
}
