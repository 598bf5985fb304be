//! Vessel aggregate - cargo-carrying craft
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: cargo can only change through planet transfers
//! - **Newtypes**: `VesselName`, `PlanetName`, `Position`
//! - **Valid by construction**: `new()` + builder take pre-validated types,
//!   `try_new()` validates raw input
//! - **Landing by name**: the vessel remembers the planet it landed on by
//!   name only, so moving a planet never drags vessels along

use serde::{Deserialize, Serialize};
use std::fmt;

use super::planet::Planet;
use crate::error::FleetError;
use crate::value_objects::{
    CargoWeight, FleetSettings, PlanetName, Position, VesselName, DEFAULT_VESSEL_CAPACITY,
};
use crate::VesselId;

/// Where a vessel can fly to.
#[derive(Debug, Clone, Copy)]
pub enum Destination<'a> {
    /// A point in free space; the vessel undocks from any planet
    Coordinates(Position),
    /// A planet; the vessel lands on it
    Planet(&'a Planet),
}

impl Destination<'_> {
    /// Build a free-space destination from a raw coordinate list.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::InvalidArgument` unless `coordinates` holds
    /// exactly two finite numbers.
    pub fn from_coordinates(coordinates: &[f64]) -> Result<Self, FleetError> {
        Position::from_coordinates(coordinates).map(Destination::Coordinates)
    }
}

impl From<Position> for Destination<'_> {
    fn from(position: Position) -> Self {
        Self::Coordinates(position)
    }
}

impl<'a> From<&'a Planet> for Destination<'a> {
    fn from(planet: &'a Planet) -> Self {
        Self::Planet(planet)
    }
}

/// A cargo vessel
///
/// # Invariants
///
/// - `cargo <= capacity` at all times
/// - `planet_name` is `Some` only after landing via [`Vessel::fly_to`]
///
/// # Example
///
/// ```
/// use cargofleet_domain::aggregates::Vessel;
///
/// let vessel = Vessel::new();
/// assert_eq!(vessel.capacity(), 1000);
/// assert_eq!(vessel.free_space(), 1000);
/// assert_eq!(vessel.report(), "Cargo ship. Location: 0,0. Occupied 0 of 1000t.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VesselRecord")]
pub struct Vessel {
    // Identity
    id: VesselId,
    name: Option<VesselName>,

    // Navigation
    position: Position,
    /// Planet the vessel is currently landed on, `None` in free space
    planet_name: Option<PlanetName>,

    // Hold
    capacity: u32,
    cargo: u32,
}

/// Unchecked serialized form; converted through `TryFrom` so snapshots
/// cannot smuggle in `cargo > capacity`.
#[derive(Deserialize)]
struct VesselRecord {
    id: VesselId,
    name: Option<VesselName>,
    position: Position,
    planet_name: Option<PlanetName>,
    capacity: u32,
    cargo: u32,
}

impl TryFrom<VesselRecord> for Vessel {
    type Error = FleetError;

    fn try_from(record: VesselRecord) -> Result<Self, Self::Error> {
        if record.cargo > record.capacity {
            return Err(FleetError::invalid_argument(format!(
                "Vessel cargo {}t exceeds capacity {}t",
                record.cargo, record.capacity
            )));
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            position: record.position,
            planet_name: record.planet_name,
            capacity: record.capacity,
            cargo: record.cargo,
        })
    }
}

impl Default for Vessel {
    fn default() -> Self {
        Self::new()
    }
}

impl Vessel {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an unnamed, empty vessel at the origin with the default
    /// capacity of 1000t.
    pub fn new() -> Self {
        Self {
            id: VesselId::new(),
            name: None,
            position: Position::origin(),
            planet_name: None,
            capacity: DEFAULT_VESSEL_CAPACITY,
            cargo: 0,
        }
    }

    /// Create an unnamed vessel using the configured default capacity.
    pub fn from_settings(settings: &FleetSettings) -> Self {
        Self {
            capacity: settings.default_vessel_capacity,
            ..Self::new()
        }
    }

    /// Create a vessel from raw, optional parts.
    ///
    /// An absent or blank name leaves the vessel unnamed. Absent position
    /// and capacity fall back to `(0,0)` and 1000t.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::InvalidArgument` if `position` is given but is
    /// not a pair of finite numbers.
    ///
    /// # Example
    ///
    /// ```
    /// use cargofleet_domain::aggregates::Vessel;
    ///
    /// let vessel = Vessel::try_new(Some("Falcon"), Some(&[0.0, 0.0][..]), Some(300)).unwrap();
    /// assert_eq!(vessel.capacity(), 300);
    ///
    /// assert!(Vessel::try_new(None, Some(&[1.0][..]), None).is_err());
    /// ```
    pub fn try_new(
        name: Option<&str>,
        position: Option<&[f64]>,
        capacity: Option<u32>,
    ) -> Result<Self, FleetError> {
        let position = match position {
            Some(coordinates) => Position::from_coordinates(coordinates).map_err(|_| {
                FleetError::invalid_argument(
                    "Vessel starting coordinates must be a pair of finite numbers",
                )
            })?,
            None => Position::origin(),
        };
        let name = match name.map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(VesselName::new(raw)?),
            _ => None,
        };

        Ok(Self {
            name,
            position,
            capacity: capacity.unwrap_or(DEFAULT_VESSEL_CAPACITY),
            ..Self::new()
        })
    }

    // =========================================================================
    // Builder Methods (for construction)
    // =========================================================================

    /// Set the vessel's name.
    pub fn with_name(mut self, name: VesselName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the vessel's starting position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the vessel's capacity.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::InvalidArgument` if the cargo already aboard
    /// would not fit. The vessel is consumed either way; cargo is never
    /// dropped to make room.
    pub fn try_with_capacity(mut self, capacity: u32) -> Result<Self, FleetError> {
        if capacity < self.cargo {
            return Err(FleetError::invalid_argument(format!(
                "Capacity {}t is below the {}t already aboard {}",
                capacity,
                self.cargo,
                self.label()
            )));
        }
        self.capacity = capacity;
        Ok(self)
    }

    /// Set the vessel's ID (used when restoring a snapshot).
    pub fn with_id(mut self, id: VesselId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> VesselId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> Option<&VesselName> {
        self.name.as_ref()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn cargo(&self) -> u32 {
        self.cargo
    }

    /// Name of the planet the vessel is landed on, if any.
    #[inline]
    pub fn planet_name(&self) -> Option<&PlanetName> {
        self.planet_name.as_ref()
    }

    pub fn is_landed(&self) -> bool {
        self.planet_name.is_some()
    }

    /// Whether the vessel is landed on a planet with the given planet's name.
    pub fn is_landed_on(&self, planet: &Planet) -> bool {
        self.planet_name.as_ref() == Some(planet.name())
    }

    /// Free space left in the hold.
    #[inline]
    pub fn free_space(&self) -> u32 {
        self.capacity - self.cargo
    }

    /// Space taken up by cargo.
    #[inline]
    pub fn occupied_space(&self) -> u32 {
        self.cargo
    }

    /// Short label used in reports and errors: `Cargo ship` or `Vessel "<name>"`.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("Vessel \"{}\"", name),
            None => "Cargo ship".to_string(),
        }
    }

    /// Human-readable status line.
    pub fn report(&self) -> String {
        self.to_string()
    }

    // =========================================================================
    // Domain Methods
    // =========================================================================

    /// Fly to a point in free space or land on a planet.
    ///
    /// Landing copies the planet's position and name at this instant.
    /// Flying to coordinates clears the landing. Returns the new position.
    ///
    /// # Example
    ///
    /// ```
    /// use cargofleet_domain::aggregates::{Planet, Vessel};
    /// use cargofleet_domain::value_objects::{PlanetName, Position};
    ///
    /// let mars = Planet::new(PlanetName::new("Mars").unwrap())
    ///     .with_position(Position::new(5.0, 5.0).unwrap());
    /// let mut vessel = Vessel::new();
    ///
    /// assert_eq!(vessel.fly_to(&mars), Position::new(5.0, 5.0).unwrap());
    /// assert!(vessel.is_landed_on(&mars));
    ///
    /// vessel.fly_to(Position::new(1.0, 2.0).unwrap());
    /// assert!(!vessel.is_landed());
    /// ```
    pub fn fly_to<'a>(&mut self, destination: impl Into<Destination<'a>>) -> Position {
        match destination.into() {
            Destination::Planet(planet) => {
                self.position = planet.position();
                self.planet_name = Some(planet.name().clone());
            }
            Destination::Coordinates(position) => {
                self.position = position;
                self.planet_name = None;
            }
        }

        tracing::debug!(
            vessel_id = %self.id,
            position = %self.position,
            planet = ?self.planet_name.as_ref().map(PlanetName::as_str),
            "Vessel moved"
        );

        self.position
    }

    /// Fly to a raw coordinate list.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::InvalidArgument` unless `coordinates` holds
    /// exactly two finite numbers. The vessel is left untouched on error.
    pub fn fly_to_coordinates(&mut self, coordinates: &[f64]) -> Result<Position, FleetError> {
        let destination = Destination::from_coordinates(coordinates).map_err(|err| {
            tracing::debug!(vessel_id = %self.id, error = %err, "Rejected flight");
            err
        })?;
        Ok(self.fly_to(destination))
    }

    // =========================================================================
    // Hold mutations (planet transfers only)
    // =========================================================================

    /// Caller has checked `weight <= free_space()`.
    pub(crate) fn stow(&mut self, weight: CargoWeight) {
        debug_assert!(weight.tonnes() <= self.free_space());
        self.cargo += weight.tonnes();
    }

    /// Caller has checked `weight <= occupied_space()`.
    pub(crate) fn discharge(&mut self, weight: CargoWeight) {
        debug_assert!(weight.tonnes() <= self.cargo);
        self.cargo -= weight.tonnes();
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Location: ", self.label())?;
        match &self.planet_name {
            Some(planet) => write!(f, "{}", planet)?,
            None => write!(f, "{}", self.position)?,
        }
        write!(f, ". Occupied {} of {}t.", self.cargo, self.capacity)
    }
}

// ============================================================================
// Tests
// ============================================================================
