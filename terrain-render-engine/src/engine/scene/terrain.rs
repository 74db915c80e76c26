/// Terrain mesh generation from an elevation grid
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use super::height_field::HeightField;
use constants::asset_names::TERRAIN_TEXTURE_PATH;
use constants::grid::{TERRAIN_CELLS, TERRAIN_PLANE_SIZE};
use constants::scene::{TERRAIN_COLOR, rgb_components};

#[derive(Component)]
pub struct Terrain;

/// Build the terrain surface mesh in the xz plane, elevations along +y.
///
/// The plane is centred on the origin and triangulated as two
/// counter-clockwise triangles per cell with smooth vertex normals.
pub fn build_terrain_mesh(field: &HeightField) -> Mesh {
    let columns = field.columns();
    let rows = field.rows();
    let cells_x = (columns - 1).max(1);
    let cells_z = (rows - 1).max(1);

    let step_x = TERRAIN_PLANE_SIZE / cells_x as f32;
    let step_z = TERRAIN_PLANE_SIZE / cells_z as f32;
    let half = TERRAIN_PLANE_SIZE * 0.5;

    let mut positions = Vec::with_capacity(columns * rows);
    let mut uvs = Vec::with_capacity(columns * rows);
    for i in 0..columns {
        for j in 0..rows {
            let x = i as f32 * step_x - half;
            let z = j as f32 * step_z - half;
            positions.push([x, field.elevation(i, j), z]);
            uvs.push([i as f32 / cells_x as f32, j as f32 / cells_z as f32]);
        }
    }

    // Two triangles per cell, wound counter-clockwise seen from above.
    let mut indices = Vec::with_capacity((columns - 1) * (rows - 1) * 6);
    for i in 0..columns - 1 {
        for j in 0..rows - 1 {
            let v00 = (i * rows + j) as u32;
            let v01 = v00 + 1;
            let v10 = ((i + 1) * rows + j) as u32;
            let v11 = v10 + 1;

            indices.extend_from_slice(&[v00, v01, v10]);
            indices.extend_from_slice(&[v10, v01, v11]);
        }
    }

    let normals = smooth_normals(&positions, &indices);

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

/// Area-weighted vertex normals accumulated from face normals.
fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let a = Vec3::from_array(positions[triangle[0] as usize]);
        let b = Vec3::from_array(positions[triangle[1] as usize]);
        let c = Vec3::from_array(positions[triangle[2] as usize]);
        let face_normal = (b - a).cross(c - a);

        for &index in triangle {
            normals[index as usize] += face_normal;
        }
    }

    normals
        .into_iter()
        .map(|normal| normal.normalize_or_zero().to_array())
        .collect()
}

/// Spawn the terrain entity with its textured material.
pub fn spawn_terrain(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    asset_server: &Res<AssetServer>,
    field: &HeightField,
) {
    let (r, g, b) = rgb_components(TERRAIN_COLOR);
    let terrain_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(r, g, b),
        base_color_texture: Some(asset_server.load(TERRAIN_TEXTURE_PATH)),
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(build_terrain_mesh(field))),
        MeshMaterial3d(terrain_material),
        Transform::default(),
        Terrain,
    ));
}

/// Spawn the built-in relief when no DTM product is selected.
pub fn spawn_procedural_terrain(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    asset_server: &Res<AssetServer>,
) {
    let field = HeightField::generate(TERRAIN_CELLS, TERRAIN_CELLS);
    spawn_terrain(commands, meshes, materials, asset_server, &field);
    println!(
        "✓ Procedural terrain created ({}x{} cells)",
        TERRAIN_CELLS, TERRAIN_CELLS
    );
}
