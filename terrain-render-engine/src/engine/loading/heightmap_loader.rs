use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct HeightmapLoader {
    pub handle: Option<Handle<Image>>,
}

// Check if the heightmap texture is loaded
pub fn check_heightmap_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    heightmap_loader: Res<HeightmapLoader>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.heightmap_loaded
        || loading_progress.fallback_to_procedural
        || !loading_progress.metadata_loaded
    {
        return;
    }

    let Some(ref handle) = heightmap_loader.handle else {
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(bevy::asset::LoadState::Loaded) => {
            println!("✓ Heightmap texture loaded");
            loading_progress.heightmap_loaded = true;
        }
        Some(bevy::asset::LoadState::Failed(_)) => {
            eprintln!("Warning: heightmap failed to load, falling back to procedural terrain");
            loading_progress.fallback_to_procedural = true;
        }
        _ => {}
    }
}
