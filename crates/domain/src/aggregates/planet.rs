//! Planet aggregate - stationary locations holding a cargo pool
//!
//! Planets own the transfer rules: a vessel must have landed on the planet
//! (matched by planet name) before cargo can move in either direction, and
//! every check runs before anything is mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::vessel::Vessel;
use crate::error::FleetError;
use crate::events::{CargoTransfer, TransferDirection, TransferReceipt};
use crate::value_objects::{
    CargoWeight, FleetSettings, PlanetName, Position, DEFAULT_PLANET_CARGO,
};
use crate::PlanetId;

/// A planet with a pool of cargo available for transfer
///
/// # Invariants
///
/// - `name` is always non-empty (enforced by `PlanetName`)
/// - `available_cargo` never goes below zero (enforced by `u32` and the
///   transfer checks)
///
/// # Example
///
/// ```
/// use cargofleet_domain::aggregates::Planet;
/// use cargofleet_domain::value_objects::{PlanetName, Position};
///
/// let mars = Planet::new(PlanetName::new("Mars").unwrap())
///     .with_position(Position::new(5.0, 5.0).unwrap())
///     .with_available_cargo(500);
///
/// assert_eq!(mars.report(), "Planet \"Mars\". Location: 5,5. Cargo available: 500t.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    // Identity
    id: PlanetId,
    name: PlanetName,

    position: Position,
    available_cargo: u32,
}

impl Planet {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a planet at the origin with no cargo.
    pub fn new(name: PlanetName) -> Self {
        Self {
            id: PlanetId::new(),
            name,
            position: Position::origin(),
            available_cargo: DEFAULT_PLANET_CARGO,
        }
    }

    /// Create a planet using the configured default cargo pool.
    pub fn from_settings(name: PlanetName, settings: &FleetSettings) -> Self {
        Self::new(name).with_available_cargo(settings.default_planet_cargo)
    }

    /// Create a planet from a raw name and optional parts.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::InvalidArgument` if `position` is given but is
    /// not a pair of finite numbers (the message names the planet), or if
    /// the name is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use cargofleet_domain::aggregates::Planet;
    ///
    /// let mars = Planet::try_new("Mars", Some(&[5.0, 5.0][..]), Some(500)).unwrap();
    /// assert_eq!(mars.available_cargo(), 500);
    ///
    /// let err = Planet::try_new("Mars", Some(&[5.0][..]), None).unwrap_err();
    /// assert!(err.to_string().contains("Mars"));
    /// ```
    pub fn try_new(
        name: &str,
        position: Option<&[f64]>,
        available_cargo: Option<u32>,
    ) -> Result<Self, FleetError> {
        let position = match position {
            Some(coordinates) => Position::from_coordinates(coordinates).map_err(|_| {
                FleetError::invalid_argument(format!(
                    "Coordinates of planet \"{}\" must be a pair of finite numbers",
                    name.trim()
                ))
            })?,
            None => Position::origin(),
        };

        Ok(Self::new(PlanetName::new(name)?)
            .with_position(position)
            .with_available_cargo(available_cargo.unwrap_or(DEFAULT_PLANET_CARGO)))
    }

    // =========================================================================
    // Builder Methods (for construction)
    // =========================================================================

    /// Set the planet's position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the cargo available on the planet.
    pub fn with_available_cargo(mut self, tonnes: u32) -> Self {
        self.available_cargo = tonnes;
        self
    }

    /// Set the planet's ID (used when restoring a snapshot).
    pub fn with_id(mut self, id: PlanetId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> PlanetId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &PlanetName {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Cargo available for loading, in tonnes.
    #[inline]
    pub fn available_cargo(&self) -> u32 {
        self.available_cargo
    }

    /// Human-readable status line.
    pub fn report(&self) -> String {
        self.to_string()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Move the planet. Vessels that landed earlier keep their own position.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    // =========================================================================
    // Transfers
    // =========================================================================

    /// Load cargo from this planet onto a landed vessel.
    ///
    /// Checks, in order: the vessel has landed here, it has enough free
    /// space, the planet has enough cargo. Returns the planet report after
    /// the transfer.
    ///
    /// # Errors
    ///
    /// - `FleetError::NotLanded`
    /// - `FleetError::InsufficientVesselCapacity`
    /// - `FleetError::InsufficientPlanetCargo`
    ///
    /// Nothing is mutated when an error is returned.
    pub fn load_cargo_to(
        &mut self,
        vessel: &mut Vessel,
        weight: CargoWeight,
    ) -> Result<String, FleetError> {
        if let Err(err) = self.check_load(vessel, weight) {
            self.log_rejection(vessel, TransferDirection::Load, weight, &err);
            return Err(err);
        }

        vessel.stow(weight);
        self.available_cargo -= weight.tonnes();

        self.log_transfer(vessel, TransferDirection::Load, weight);
        Ok(self.report())
    }

    /// Unload cargo from a landed vessel onto this planet.
    ///
    /// Checks, in order: the vessel has landed here, it carries at least
    /// `weight`. Planets have no storage limit. Returns the planet report
    /// after the transfer.
    ///
    /// # Errors
    ///
    /// - `FleetError::NotLanded`
    /// - `FleetError::InsufficientVesselCargo`
    /// - `FleetError::InvalidArgument` if the planet pool would overflow `u32`
    ///
    /// Nothing is mutated when an error is returned.
    pub fn unload_cargo_from(
        &mut self,
        vessel: &mut Vessel,
        weight: CargoWeight,
    ) -> Result<String, FleetError> {
        if let Err(err) = self.check_unload(vessel, weight) {
            self.log_rejection(vessel, TransferDirection::Unload, weight, &err);
            return Err(err);
        }

        vessel.discharge(weight);
        self.available_cargo += weight.tonnes();

        self.log_transfer(vessel, TransferDirection::Unload, weight);
        Ok(self.report())
    }

    /// Apply a transfer request and describe the outcome.
    pub fn transfer(
        &mut self,
        vessel: &mut Vessel,
        transfer: CargoTransfer,
    ) -> Result<TransferReceipt, FleetError> {
        let planet_report = match transfer {
            CargoTransfer::Load(weight) => self.load_cargo_to(vessel, weight)?,
            CargoTransfer::Unload(weight) => self.unload_cargo_from(vessel, weight)?,
        };

        Ok(TransferReceipt {
            vessel_id: vessel.id(),
            planet_id: self.id,
            planet_name: self.name.clone(),
            direction: transfer.direction(),
            weight: transfer.weight(),
            vessel_cargo: vessel.cargo(),
            planet_cargo: self.available_cargo,
            planet_report,
        })
    }

    // =========================================================================
    // Checks
    // =========================================================================

    fn ensure_landed(&self, vessel: &Vessel) -> Result<(), FleetError> {
        if vessel.is_landed_on(self) {
            Ok(())
        } else {
            Err(FleetError::not_landed(vessel.label(), self.name.as_str()))
        }
    }

    fn check_load(&self, vessel: &Vessel, weight: CargoWeight) -> Result<(), FleetError> {
        self.ensure_landed(vessel)?;

        let requested = weight.tonnes();
        if vessel.free_space() < requested {
            return Err(FleetError::InsufficientVesselCapacity {
                requested,
                free: vessel.free_space(),
            });
        }
        if self.available_cargo < requested {
            return Err(FleetError::InsufficientPlanetCargo {
                requested,
                available: self.available_cargo,
            });
        }
        Ok(())
    }

    fn check_unload(&self, vessel: &Vessel, weight: CargoWeight) -> Result<(), FleetError> {
        self.ensure_landed(vessel)?;

        let requested = weight.tonnes();
        if vessel.occupied_space() < requested {
            return Err(FleetError::InsufficientVesselCargo {
                requested,
                aboard: vessel.occupied_space(),
            });
        }
        if self.available_cargo.checked_add(requested).is_none() {
            return Err(FleetError::invalid_argument(format!(
                "Planet \"{}\" cannot hold {}t more cargo",
                self.name, requested
            )));
        }
        Ok(())
    }

    fn log_transfer(&self, vessel: &Vessel, direction: TransferDirection, weight: CargoWeight) {
        tracing::debug!(
            planet = %self.name,
            vessel_id = %vessel.id(),
            %direction,
            weight = weight.tonnes(),
            vessel_cargo = vessel.cargo(),
            planet_cargo = self.available_cargo,
            "Cargo transferred"
        );
    }

    fn log_rejection(
        &self,
        vessel: &Vessel,
        direction: TransferDirection,
        weight: CargoWeight,
        err: &FleetError,
    ) {
        tracing::debug!(
            planet = %self.name,
            vessel_id = %vessel.id(),
            %direction,
            weight = weight.tonnes(),
            kind = ?err.kind(),
            "Cargo transfer rejected"
        );
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Planet \"{}\". Location: {}. ", self.name, self.position)?;
        if self.available_cargo > 0 {
            write!(f, "Cargo available: {}t.", self.available_cargo)
        } else {
            write!(f, "No cargo.")
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
