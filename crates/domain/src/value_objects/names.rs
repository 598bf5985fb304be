//! Validated name newtypes for vessels and planets
//!
//! A name is any non-blank string. Surrounding whitespace is trimmed, so
//! `" Mars"` and `"Mars"` name the same planet.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FleetError;

/// Trim `raw` and reject it if nothing is left. `what` names the field in
/// the error message.
fn validate_name(raw: String, what: &str) -> Result<String, FleetError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FleetError::invalid_argument(format!(
            "{what} name cannot be empty"
        )));
    }
    if trimmed.len() == raw.len() {
        Ok(raw)
    } else {
        Ok(trimmed.to_string())
    }
}

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a ", $what, " name, trimmed of surrounding whitespace.")]
            ///
            /// # Errors
            ///
            /// Returns `FleetError::InvalidArgument` if the name is blank.
            pub fn new(name: impl Into<String>) -> Result<Self, FleetError> {
                validate_name(name.into(), $what).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = FleetError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> String {
                name.0
            }
        }
    };
}

define_name!(
    /// Name a vessel is reported under
    VesselName,
    "Vessel"
);

define_name!(
    /// Name of a planet
    ///
    /// Landing is matched by comparing planet names, so two planets sharing a
    /// name are interchangeable as far as cargo transfers are concerned.
    PlanetName,
    "Planet"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FleetErrorKind;

    mod vessel_name {
        use super::*;

        #[test]
        fn valid_name_is_trimmed() {
            let name = VesselName::new("  Falcon  ").expect("valid name");
            assert_eq!(name.as_str(), "Falcon");
            assert_eq!(name.to_string(), "Falcon");
        }

        #[test]
        fn empty_name_is_rejected() {
            let err = VesselName::new("   ").unwrap_err();
            assert_eq!(err.kind(), FleetErrorKind::InvalidArgument);
            assert!(err.to_string().contains("Vessel name cannot be empty"));
        }

        #[test]
        fn long_names_are_accepted() {
            let long = "x".repeat(5_000);
            let name = VesselName::new(long.clone()).expect("any length");
            assert_eq!(name.as_str(), long);
        }

        #[test]
        fn serde_rejects_empty_name() {
            let result: Result<VesselName, _> = serde_json::from_str("\"\"");
            assert!(result.is_err());

            let name: VesselName = serde_json::from_str("\"Falcon\"").expect("deserialize");
            assert_eq!(name.as_str(), "Falcon");
        }
    }

    mod planet_name {
        use super::*;
        use crate::aggregates::Planet;

        #[test]
        fn valid_name_is_trimmed() {
            let name = PlanetName::new(" Mars").expect("valid name");
            assert_eq!(name.as_str(), "Mars");
        }

        #[test]
        fn empty_name_is_rejected() {
            let err = PlanetName::new("").unwrap_err();
            assert!(err.to_string().contains("Planet name cannot be empty"));
        }

        #[test]
        fn names_compare_by_value() {
            let a = PlanetName::new("Mars").expect("valid name");
            let b = PlanetName::new("Mars ").expect("valid name");
            assert_eq!(a, b);
        }

        #[test]
        fn planet_with_long_name_can_be_built() {
            let name = "x".repeat(201);
            let planet = Planet::try_new(&name, None, None).expect("any length");
            assert_eq!(planet.name().as_str(), name);
        }
    }
}
