/// Terrain cells per axis (127 tiles = 128 vertices)
pub const TERRAIN_CELLS: usize = 127;

/// Terrain vertices per axis
pub const TERRAIN_VERTICES: usize = TERRAIN_CELLS + 1;

/// World-space extent of the terrain plane per axis (metres)
pub const TERRAIN_PLANE_SIZE: f32 = 128.0;

/// Divisor of the procedural elevation formula sin((i*i + j*j) / divisor)
pub const HEIGHT_FORMULA_DIVISOR: f32 = 10.0 * 100.0;

/// Forced elevation of the origin vertex, written after the formula pass
pub const ORIGIN_ELEVATION: f32 = -1.0;

/// Resolution of preprocessed heightmap assets and raw heightmap dumps
pub const HEIGHTMAP_SIZE: usize = 128;

/// Elevation span preprocessed heightmaps are mapped onto in the viewer,
/// matching the range of the procedural formula
pub const RELIEF_MIN: f32 = -1.0;
pub const RELIEF_MAX: f32 = 1.0;
