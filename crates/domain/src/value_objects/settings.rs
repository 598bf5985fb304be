//! Fleet settings value object
//!
//! Defaults applied when vessels and planets are created without explicit
//! capacity or cargo. Settings derive serde so hosts can persist or ship
//! them alongside their own configuration.

use serde::{Deserialize, Serialize};

/// Default vessel capacity in tonnes
pub const DEFAULT_VESSEL_CAPACITY: u32 = 1000;

/// Default cargo pool of a planet in tonnes
pub const DEFAULT_PLANET_CARGO: u32 = 0;

/// Environment variable overriding [`FleetSettings::default_vessel_capacity`]
pub const ENV_DEFAULT_VESSEL_CAPACITY: &str = "CARGOFLEET_DEFAULT_VESSEL_CAPACITY";

/// Environment variable overriding [`FleetSettings::default_planet_cargo`]
pub const ENV_DEFAULT_PLANET_CARGO: &str = "CARGOFLEET_DEFAULT_PLANET_CARGO";

/// All configurable fleet defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FleetSettings {
    /// Capacity given to vessels created without one
    #[serde(default = "default_vessel_capacity")]
    pub default_vessel_capacity: u32,

    /// Cargo pool given to planets created without one
    #[serde(default = "default_planet_cargo")]
    pub default_planet_cargo: u32,
}

fn default_vessel_capacity() -> u32 { DEFAULT_VESSEL_CAPACITY }
fn default_planet_cargo() -> u32 { DEFAULT_PLANET_CARGO }

impl Default for FleetSettings {
    fn default() -> Self {
        Self {
            default_vessel_capacity: DEFAULT_VESSEL_CAPACITY,
            default_planet_cargo: DEFAULT_PLANET_CARGO,
        }
    }
}

impl FleetSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup, using defaults for missing or
    /// unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            default_vessel_capacity: lookup_or(
                &lookup,
                ENV_DEFAULT_VESSEL_CAPACITY,
                defaults.default_vessel_capacity,
            ),
            default_planet_cargo: lookup_or(
                &lookup,
                ENV_DEFAULT_PLANET_CARGO,
                defaults.default_planet_cargo,
            ),
        }
    }
}

fn lookup_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "Ignoring unparsable fleet setting");
                default
            }
        },
        None => default,
    }
}
