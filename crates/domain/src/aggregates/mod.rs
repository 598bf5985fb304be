//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Exposes behavior through methods, not public fields
//! - Validates every precondition before mutating anything
//!
//! Vessels and planets never hold references to each other. A vessel
//! records the *name* of the planet it landed on; planets receive the
//! vessel as an argument when cargo moves.

pub mod planet;
pub mod vessel;

pub use planet::Planet;
pub use vessel::{Destination, Vessel};
