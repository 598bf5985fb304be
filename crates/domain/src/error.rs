//! Unified error types for the domain layer
//!
//! Every vessel and planet operation reports failures through [`FleetError`].
//! Operations check all of their preconditions before touching any state,
//! so an `Err` always means nothing was mutated.

use thiserror::Error;

/// Unified error type for fleet operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// Malformed input (coordinates, names, weights)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required argument was not supplied
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// Transfer attempted while the vessel is not docked at the acting planet
    #[error("Vessel {vessel} has not landed on planet \"{planet}\"")]
    NotLanded { vessel: String, planet: String },

    /// Load would exceed the vessel's free space
    #[error("Not enough free space aboard: requested {requested}t, free {free}t")]
    InsufficientVesselCapacity { requested: u32, free: u32 },

    /// Unload asks for more cargo than the vessel carries
    #[error("Not enough cargo aboard: requested {requested}t, aboard {aboard}t")]
    InsufficientVesselCargo { requested: u32, aboard: u32 },

    /// Load asks for more cargo than the planet has
    #[error("Not enough cargo on planet: requested {requested}t, available {available}t")]
    InsufficientPlanetCargo { requested: u32, available: u32 },
}

/// Discriminant of [`FleetError`] for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FleetErrorKind {
    InvalidArgument,
    MissingArgument,
    NotLanded,
    InsufficientVesselCapacity,
    InsufficientVesselCargo,
    InsufficientPlanetCargo,
}

impl FleetError {
    /// Creates an invalid argument error for malformed input.
    ///
    /// Use this when a raw value cannot be turned into a domain type:
    /// - Coordinates that are not exactly two finite numbers
    /// - Empty or oversized names
    /// - Negative or fractional cargo weights
    ///
    /// # Example
    /// ```ignore
    /// if coords.len() != 2 {
    ///     return Err(FleetError::invalid_argument("Coordinates must be a pair"));
    /// }
    /// ```
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a missing argument error
    pub fn missing_argument(msg: impl Into<String>) -> Self {
        Self::MissingArgument(msg.into())
    }

    /// Create a not-landed error
    pub fn not_landed(vessel: impl Into<String>, planet: impl Into<String>) -> Self {
        Self::NotLanded {
            vessel: vessel.into(),
            planet: planet.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> FleetErrorKind {
        match self {
            Self::InvalidArgument(_) => FleetErrorKind::InvalidArgument,
            Self::MissingArgument(_) => FleetErrorKind::MissingArgument,
            Self::NotLanded { .. } => FleetErrorKind::NotLanded,
            Self::InsufficientVesselCapacity { .. } => FleetErrorKind::InsufficientVesselCapacity,
            Self::InsufficientVesselCargo { .. } => FleetErrorKind::InsufficientVesselCargo,
            Self::InsufficientPlanetCargo { .. } => FleetErrorKind::InsufficientPlanetCargo,
        }
    }
}
