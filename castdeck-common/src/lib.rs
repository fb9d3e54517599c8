//! castdeck-common - Shared types for the castdeck dashboard
//!
//! Contains the wire types exchanged with the backend API and the pure
//! fetch-lifecycle state machine used by the web app's stores. No UI
//! dependencies, so everything here is unit-testable.

pub mod device;
pub mod fetch_state;
pub mod media;

pub use device::*;
pub use fetch_state::*;
pub use media::*;
