//! Value objects - immutable, validated building blocks of the aggregates

mod cargo_weight;
mod names;
mod position;
mod settings;

pub use cargo_weight::CargoWeight;
pub use names::{PlanetName, VesselName};
pub use position::Position;
pub use settings::{
    FleetSettings, DEFAULT_PLANET_CARGO, DEFAULT_VESSEL_CAPACITY, ENV_DEFAULT_PLANET_CARGO,
    ENV_DEFAULT_VESSEL_CAPACITY,
};
