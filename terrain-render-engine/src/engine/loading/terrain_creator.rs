use bevy::prelude::*;

use crate::engine::assets::dtm_metadata::DtmMetadata;
use crate::engine::loading::heightmap_loader::HeightmapLoader;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::height_field::HeightField;
use crate::engine::scene::heightmap::sample_heightmap_bilinear;
use crate::engine::scene::terrain::{spawn_procedural_terrain, spawn_terrain};
use constants::grid::{RELIEF_MAX, RELIEF_MIN, TERRAIN_CELLS, TERRAIN_VERTICES};

pub fn create_terrain_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    heightmap_loader: Res<HeightmapLoader>,
    images: Res<Assets<Image>>,
    metadata: Option<Res<DtmMetadata>>,
) {
    if loading_progress.terrain_created {
        return;
    }

    if loading_progress.fallback_to_procedural {
        spawn_procedural_terrain(&mut commands, &mut meshes, &mut materials, &asset_server);
        loading_progress.terrain_created = true;
        return;
    }

    if !loading_progress.heightmap_loaded {
        return;
    }

    let Some(ref handle) = heightmap_loader.handle else {
        return;
    };
    let Some(heightmap_image) = images.get(handle) else {
        return;
    };

    let field = height_field_from_heightmap(heightmap_image);
    spawn_terrain(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &field,
    );
    loading_progress.terrain_created = true;

    if let Some(metadata) = metadata {
        println!(
            "✓ Terrain created from {} ({} valid samples)",
            metadata.source, metadata.elevation.valid_samples
        );
    }
}

/// Resample the normalised heightmap onto the terrain vertex grid,
/// mapping stored 0..1 heights onto the relief elevation span.
fn height_field_from_heightmap(heightmap_image: &Image) -> HeightField {
    let mut elevations = Vec::with_capacity(TERRAIN_VERTICES * TERRAIN_VERTICES);

    for i in 0..TERRAIN_VERTICES {
        for j in 0..TERRAIN_VERTICES {
            let norm_x = i as f32 / TERRAIN_CELLS as f32;
            let norm_z = j as f32 / TERRAIN_CELLS as f32;
            let stored = sample_heightmap_bilinear(heightmap_image, norm_x, norm_z);
            elevations.push(RELIEF_MIN + stored * (RELIEF_MAX - RELIEF_MIN));
        }
    }

    HeightField::from_elevations(TERRAIN_VERTICES, TERRAIN_VERTICES, elevations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
    use constants::grid::HEIGHTMAP_SIZE;

    fn heightmap_image(heights: impl Fn(usize, usize) -> f32) -> Image {
        let mut data = Vec::with_capacity(HEIGHTMAP_SIZE * HEIGHTMAP_SIZE * 4);
        for z in 0..HEIGHTMAP_SIZE {
            for x in 0..HEIGHTMAP_SIZE {
                data.extend_from_slice(&heights(x, z).to_le_bytes());
            }
        }

        Image::new(
            Extent3d {
                width: HEIGHTMAP_SIZE as u32,
                height: HEIGHTMAP_SIZE as u32,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            data,
            TextureFormat::R32Float,
            RenderAssetUsages::MAIN_WORLD,
        )
    }

    #[test]
    fn field_covers_the_full_terrain_grid() {
        let image = heightmap_image(|_, _| 0.5);
        let field = height_field_from_heightmap(&image);
        assert_eq!(field.columns(), TERRAIN_VERTICES);
        assert_eq!(field.rows(), TERRAIN_VERTICES);
    }

    #[test]
    fn stored_heights_map_onto_the_relief_span() {
        // A flat 0.0 product sits at the bottom of the relief span,
        // a flat 1.0 product at the top.
        let low = height_field_from_heightmap(&heightmap_image(|_, _| 0.0));
        let high = height_field_from_heightmap(&heightmap_image(|_, _| 1.0));

        assert_eq!(low.elevation(64, 64), RELIEF_MIN);
        assert_eq!(high.elevation(64, 64), RELIEF_MAX);
    }

    #[test]
    fn corner_vertices_sample_corner_pixels() {
        let image = heightmap_image(|x, z| match (x, z) {
            (0, 0) => 0.25,
            (127, 127) => 0.75,
            _ => 0.5,
        });
        let field = height_field_from_heightmap(&image);

        let span = RELIEF_MAX - RELIEF_MIN;
        assert_eq!(field.elevation(0, 0), RELIEF_MIN + 0.25 * span);
        assert_eq!(field.elevation(127, 127), RELIEF_MIN + 0.75 * span);
    }
}
