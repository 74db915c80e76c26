//! Scene construction for the terrain walk.
//!
//! Provides procedural relief generation, terrain mesh building,
//! the spinning avatar, and heightmap sampling for DTM terrain.

/// Spinning avatar marker, spawning, and per-frame rotation.
pub mod avatar;

/// Elevation grid shared by procedural and DTM terrain sources.
pub mod height_field;

/// Heightmap sampling utilities for terrain reconstruction.
///
/// Bilinear interpolation of R32F heightmap textures for smooth elevation sampling.
pub mod heightmap;

/// Terrain mesh generation and spawning from an elevation grid.
pub mod terrain;
