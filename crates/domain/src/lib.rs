//! Cargofleet domain model
//!
//! Vessels fly between planets and move cargo to and from them. Everything
//! is in-memory and synchronous; callers own the vessels and planets and
//! pass them to each other's methods.
//!
//! ```
//! use cargofleet_domain::{CargoWeight, Planet, Vessel};
//!
//! let mut mars = Planet::try_new("Mars", Some(&[5.0, 5.0][..]), Some(500)).unwrap();
//! let mut falcon = Vessel::try_new(Some("Falcon"), None, Some(300)).unwrap();
//!
//! falcon.fly_to(&mars);
//! let report = mars.load_cargo_to(&mut falcon, CargoWeight::new(300)).unwrap();
//!
//! assert_eq!(report, "Planet \"Mars\". Location: 5,5. Cargo available: 200t.");
//! assert_eq!(falcon.free_space(), 0);
//! ```

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Destination, Planet, Vessel};
pub use error::{FleetError, FleetErrorKind};
pub use events::{CargoTransfer, TransferDirection, TransferReceipt};
pub use ids::{PlanetId, VesselId};
pub use value_objects::{CargoWeight, FleetSettings, PlanetName, Position, VesselName};
