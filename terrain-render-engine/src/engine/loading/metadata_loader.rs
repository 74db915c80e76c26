use bevy::prelude::*;

use crate::engine::assets::dtm_metadata::DtmMetadata;
use crate::engine::core::app_setup::ViewerConfig;
use crate::engine::loading::heightmap_loader::HeightmapLoader;
use crate::engine::loading::progress::LoadingProgress;
use constants::asset_names::{DTM_ASSET_DIR, metadata_file_name};
use constants::grid::HEIGHTMAP_SIZE;

#[derive(Resource, Default)]
pub struct MetadataLoader {
    handle: Option<Handle<DtmMetadata>>,
}

// Start the loading process when a DTM product is selected
pub fn start_loading(
    config: Res<ViewerConfig>,
    mut metadata_loader: ResMut<MetadataLoader>,
    asset_server: Res<AssetServer>,
) {
    let Some(stem) = config.dtm_stem.as_deref() else {
        return;
    };

    let metadata_path = format!(
        "{}/{}",
        DTM_ASSET_DIR,
        metadata_file_name(stem, HEIGHTMAP_SIZE)
    );
    println!("Loading DTM metadata from: {}", metadata_path);
    metadata_loader.handle = Some(asset_server.load(&metadata_path));
}

// Load metadata and start heightmap loading when ready
pub fn load_metadata_system(
    mut loading_progress: ResMut<LoadingProgress>,
    metadata_loader: Res<MetadataLoader>,
    mut heightmap_loader: ResMut<HeightmapLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    metadata_assets: Res<Assets<DtmMetadata>>,
) {
    if loading_progress.metadata_loaded || loading_progress.fallback_to_procedural {
        return;
    }

    if let Some(ref handle) = metadata_loader.handle {
        if let Some(metadata) = metadata_assets.get(handle) {
            println!(
                "✓ DTM metadata loaded: {} ({}x{} heightmap)",
                metadata.source, metadata.grid_size, metadata.grid_size
            );
            println!(
                "  Elevation range: {:.2} to {:.2} metres",
                metadata.elevation.min, metadata.elevation.max
            );

            // Start loading the heightmap now that we know its file name
            let heightmap_path = format!("{}/{}", DTM_ASSET_DIR, metadata.heightmap_file);
            heightmap_loader.handle = Some(asset_server.load(&heightmap_path));

            commands.insert_resource(metadata.clone());
            loading_progress.metadata_loaded = true;
        } else if matches!(
            asset_server.get_load_state(handle),
            Some(bevy::asset::LoadState::Failed(_))
        ) {
            eprintln!("Warning: DTM metadata failed to load, falling back to procedural terrain");
            loading_progress.fallback_to_procedural = true;
        }
    }
}
