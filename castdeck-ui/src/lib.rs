//! castdeck-ui - Pure view components for the castdeck dashboard
//!
//! Components here take display data and `EventHandler` callbacks only; all
//! fetching, polling and shared state live in the app crate.

pub mod components;

pub use components::*;
