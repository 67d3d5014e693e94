//! Domain types for the journey server.
//!
//! These are the shapes handed back to callers after the provider's
//! responses have been validated and normalized. Identifier types enforce
//! their invariants at construction time.

mod journey;
mod mode;
mod station;

pub use journey::{Journey, Leg};
pub use mode::{InvalidMode, ModeSet, TransportMode};
pub use station::{InvalidStationId, StationId, StationMatch};
