use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Elevation statistics of the source raster in metres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevationRange {
    pub min: f32,
    pub max: f32,
    pub valid_samples: usize,
    pub missing_samples: usize,
}

/// Conversion metadata emitted next to each heightmap as a Bevy asset.
/// Mirrors the converter's JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct DtmMetadata {
    pub source: String,
    pub grid_size: usize,
    pub heightmap_file: String,
    pub preview_file: String,
    pub elevation: ElevationRange,
}
