/// Heightmap sampling utilities for terrain reconstruction
use bevy::prelude::*;

use constants::grid::HEIGHTMAP_SIZE;

/// Sample heightmap at normalised coordinates with bilinear interpolation.
///
/// Returns the stored height in the 0..1 range of the converted product.
pub fn sample_heightmap_bilinear(heightmap_image: &Image, norm_x: f32, norm_z: f32) -> f32 {
    let data = heightmap_image
        .data
        .as_ref()
        .expect("Heightmap image data not available");

    // Convert normalised coords to continuous pixel space
    let pixel_x_f = norm_x * (HEIGHTMAP_SIZE - 1) as f32;
    let pixel_z_f = norm_z * (HEIGHTMAP_SIZE - 1) as f32;

    // Get integer pixel coordinates
    let x0 = pixel_x_f.floor() as usize;
    let z0 = pixel_z_f.floor() as usize;
    let x1 = (x0 + 1).min(HEIGHTMAP_SIZE - 1);
    let z1 = (z0 + 1).min(HEIGHTMAP_SIZE - 1);

    // Calculate interpolation weights
    let wx = pixel_x_f - x0 as f32;
    let wz = pixel_z_f - z0 as f32;

    // Sample four corners
    let h00 = sample_height_at_pixel(data, x0, z0);
    let h10 = sample_height_at_pixel(data, x1, z0);
    let h01 = sample_height_at_pixel(data, x0, z1);
    let h11 = sample_height_at_pixel(data, x1, z1);

    // Bilinear interpolation
    let h_top = h00 * (1.0 - wx) + h10 * wx;
    let h_bottom = h01 * (1.0 - wx) + h11 * wx;
    h_top * (1.0 - wz) + h_bottom * wz
}

/// Sample height at specific pixel coordinates
fn sample_height_at_pixel(data: &[u8], x: usize, z: usize) -> f32 {
    // Check if coordinates are within texture bounds
    if x >= HEIGHTMAP_SIZE || z >= HEIGHTMAP_SIZE {
        return 0.0; // Return default height for out-of-bounds access
    }

    let pixel_index = (z * HEIGHTMAP_SIZE + x) * 4; // 4 bytes per f32

    // Check if we have enough data to read
    if pixel_index + 4 > data.len() {
        return 0.0; // Return default height if data is insufficient
    }

    let height_bytes = &data[pixel_index..pixel_index + 4];
    f32::from_le_bytes([
        height_bytes[0],
        height_bytes[1],
        height_bytes[2],
        height_bytes[3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

    fn test_heightmap(heights: impl Fn(usize, usize) -> f32) -> Image {
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
    fn samples_exact_pixel_values_at_corners() {
        let image = test_heightmap(|x, z| match (x, z) {
            (0, 0) => 0.25,
            (127, 127) => 0.75,
            _ => 0.5,
        });

        assert_eq!(sample_heightmap_bilinear(&image, 0.0, 0.0), 0.25);
        assert_eq!(sample_heightmap_bilinear(&image, 1.0, 1.0), 0.75);
    }

    #[test]
    fn interpolates_between_neighbouring_pixels() {
        // Left half 0, right half 1, so a sample between the two middle
        // columns lands halfway.
        let image = test_heightmap(|x, _| if x < 64 { 0.0 } else { 1.0 });

        let norm_x = 63.5 / 127.0;
        let sampled = sample_heightmap_bilinear(&image, norm_x, 0.0);
        assert!((sampled - 0.5).abs() < 1e-3);
    }

    #[test]
    fn constant_field_samples_flat_everywhere() {
        let image = test_heightmap(|_, _| 0.42);

        for &(x, z) in &[(0.0, 0.0), (0.31, 0.77), (1.0, 0.5), (1.0, 1.0)] {
            let sampled = sample_heightmap_bilinear(&image, x, z);
            assert!((sampled - 0.42).abs() < 1e-6);
        }
    }

    #[test]
    fn truncated_data_yields_zero_height() {
        let truncated = vec![0u8; 16];
        assert_eq!(sample_height_at_pixel(&truncated, 10, 10), 0.0);
    }
}
