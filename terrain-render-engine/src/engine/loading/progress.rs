use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub metadata_loaded: bool,
    pub heightmap_loaded: bool,
    pub fallback_to_procedural: bool,
    pub terrain_created: bool,
}
