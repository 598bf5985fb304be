//! Cargo transfer domain events
//!
//! These types describe a requested transfer and communicate what happened
//! once a planet applied it to a landed vessel.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{CargoWeight, PlanetName};
use crate::{PlanetId, VesselId};

/// Which way cargo moves between a planet and a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferDirection {
    /// Planet -> vessel
    Load,
    /// Vessel -> planet
    Unload,
}

impl fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Unload => write!(f, "unload"),
        }
    }
}

/// A transfer request to apply at a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "direction", content = "weight")]
pub enum CargoTransfer {
    Load(CargoWeight),
    Unload(CargoWeight),
}

impl CargoTransfer {
    pub fn direction(&self) -> TransferDirection {
        match self {
            Self::Load(_) => TransferDirection::Load,
            Self::Unload(_) => TransferDirection::Unload,
        }
    }

    pub fn weight(&self) -> CargoWeight {
        match self {
            Self::Load(weight) | Self::Unload(weight) => *weight,
        }
    }
}

/// Outcome of a completed transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
    pub vessel_id: VesselId,
    pub planet_id: PlanetId,
    pub planet_name: PlanetName,
    pub direction: TransferDirection,
    pub weight: CargoWeight,
    /// Cargo aboard the vessel after the transfer
    pub vessel_cargo: u32,
    /// Cargo left on the planet after the transfer
    pub planet_cargo: u32,
    /// Planet report reflecting the post-transfer state
    pub planet_report: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_exposes_direction_and_weight() {
        let load = CargoTransfer::Load(CargoWeight::new(10));
        assert_eq!(load.direction(), TransferDirection::Load);
        assert_eq!(load.weight(), CargoWeight::new(10));

        let unload = CargoTransfer::Unload(CargoWeight::new(3));
        assert_eq!(unload.direction(), TransferDirection::Unload);
        assert_eq!(unload.direction().to_string(), "unload");
    }

    #[test]
    fn transfer_serializes_with_direction_tag() {
        let json = serde_json::to_value(CargoTransfer::Load(CargoWeight::new(25)))
            .expect("serialize");
        assert_eq!(json["direction"], "load");
        assert_eq!(json["weight"], 25);
    }
}
