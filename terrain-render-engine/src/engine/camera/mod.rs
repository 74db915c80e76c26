//! First-person camera for walking the terrain.
//!
//! Provides fly-style movement with mouse look while the right button is held,
//! matching the feel of a classic first-person viewer.

/// First-person controller resource and camera update system.
pub mod first_person;
