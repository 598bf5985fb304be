//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified.

pub mod transfer_events;

pub use transfer_events::*;
