/// Grayscale preview rendering for processed heightmaps
use crate::grid::ElevationGrid;
use image::{GrayImage, Luma};

/// Write a normalised elevation grid as an 8-bit grayscale PNG.
/// Dark pixels are low terrain, bright pixels high.
pub fn write_preview_png(
    path: &str,
    grid: &ElevationGrid,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = grid.size as u32;
    let image = GrayImage::from_fn(size, size, |x, y| {
        let height = grid.height(x as usize, y as usize).clamp(0.0, 1.0);
        Luma([(height * 255.0).round() as u8])
    });

    image.save(path)?;
    Ok(())
}
