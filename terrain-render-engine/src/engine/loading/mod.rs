//! Asset loading and initialisation systems for DTM terrain.
//!
//! Manages the staged loading pipeline from metadata parsing through
//! heightmap loading to terrain creation, with a procedural fallback
//! when a product cannot be loaded.

/// Heightmap texture loading state monitoring.
///
/// Tracks load completion of the R32F heightmap referenced by the metadata.
pub mod heightmap_loader;

/// DTM metadata loading and heightmap load kickoff.
///
/// Initiates heightmap loading after the metadata JSON is parsed.
pub mod metadata_loader;

/// Loading progress tracking resource for state transitions.
///
/// Monitors completion of metadata, heightmap, and terrain creation.
pub mod progress;

/// Terrain entity creation once the heightmap is available.
///
/// Resamples the heightmap onto the terrain grid and spawns the surface.
pub mod terrain_creator;
