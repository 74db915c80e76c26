/// Downsampling of full resolution rasters onto the square render grid
use crate::bounds::ElevationBounds;
use crate::samples::DtmRaster;

/// Square elevation grid at render resolution, row ordered.
pub struct ElevationGrid {
    pub size: usize,
    pub heights: Vec<f32>,
}

impl ElevationGrid {
    /// Downsample a raster by box averaging.
    /// Every target cell averages the valid samples of its source box,
    /// cells whose box holds no valid sample stay NaN for a later fill
    /// pass. A raster smaller than the grid degenerates to nearest
    /// sampling.
    pub fn from_raster(raster: &DtmRaster, size: usize) -> Self {
        let mut heights = Vec::with_capacity(size * size);

        for ty in 0..size {
            let (row_start, row_end) = source_span(ty, size, raster.height);

            for tx in 0..size {
                let (col_start, col_end) = source_span(tx, size, raster.width);

                let mut sum = 0.0f64;
                let mut count = 0usize;
                for y in row_start..row_end {
                    for x in col_start..col_end {
                        let sample = raster.sample(x, y);
                        if !sample.is_nan() {
                            sum += sample as f64;
                            count += 1;
                        }
                    }
                }

                if count > 0 {
                    heights.push((sum / count as f64) as f32);
                } else {
                    heights.push(f32::NAN);
                }
            }
        }

        Self { size, heights }
    }

    /// Fill missing cells from their nearest valid neighbour in scan
    /// order, with a reverse pass for gaps before the first valid cell.
    /// A grid with no valid cell at all is left untouched.
    pub fn fill_missing(&mut self) {
        let mut last_valid = f32::NAN;
        for height in self.heights.iter_mut() {
            if height.is_nan() {
                if !last_valid.is_nan() {
                    *height = last_valid;
                }
            } else {
                last_valid = *height;
            }
        }

        let mut last_valid = f32::NAN;
        for height in self.heights.iter_mut().rev() {
            if height.is_nan() {
                if !last_valid.is_nan() {
                    *height = last_valid;
                }
            } else {
                last_valid = *height;
            }
        }
    }

    /// Normalise every height to the 0-1 range of the raster bounds
    pub fn normalize(&mut self, bounds: &ElevationBounds) {
        for height in self.heights.iter_mut() {
            *height = bounds.normalize(*height);
        }
    }

    /// Height at a grid position
    pub fn height(&self, x: usize, y: usize) -> f32 {
        self.heights[y * self.size + x]
    }
}

/// Half-open span of source rows or columns covered by one target cell
fn source_span(target: usize, target_size: usize, source_size: usize) -> (usize, usize) {
    let start = target * source_size / target_size;
    let end = ((target + 1) * source_size / target_size)
        .max(start + 1)
        .min(source_size);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(width: usize, height: usize, samples: Vec<f32>) -> DtmRaster {
        DtmRaster {
            width,
            height,
            samples,
        }
    }

    #[test]
    fn downsample_averages_source_boxes() {
        let source = raster(4, 4, (0..16).map(|i| i as f32).collect());
        let grid = ElevationGrid::from_raster(&source, 2);

        assert_eq!(grid.height(0, 0), 2.5);
        assert_eq!(grid.height(1, 0), 4.5);
        assert_eq!(grid.height(0, 1), 10.5);
        assert_eq!(grid.height(1, 1), 12.5);
    }

    #[test]
    fn constant_raster_downsamples_to_constant_grid() {
        let source = raster(8, 8, vec![-2100.0; 64]);
        let grid = ElevationGrid::from_raster(&source, 2);
        assert!(grid.heights.iter().all(|&h| h == -2100.0));
    }

    #[test]
    fn checkerboard_averages_to_the_mean() {
        let samples: Vec<f32> = (0..16)
            .map(|i| if (i / 4 + i % 4) % 2 == 0 { 0.0 } else { 1.0 })
            .collect();
        let grid = ElevationGrid::from_raster(&raster(4, 4, samples), 2);
        assert!(grid.heights.iter().all(|&h| h == 0.5));
    }

    #[test]
    fn downsample_skips_missing_samples() {
        let mut samples: Vec<f32> = (0..16).map(|i| i as f32).collect();
        samples[0] = f32::NAN;
        let grid = ElevationGrid::from_raster(&raster(4, 4, samples), 2);

        // Box of (0,0) averages the three remaining samples 1, 4, 5.
        assert_eq!(grid.height(0, 0), 10.0 / 3.0);
    }

    #[test]
    fn fully_missing_box_stays_missing_until_filled() {
        let mut samples: Vec<f32> = vec![1.0; 16];
        samples[2] = f32::NAN;
        samples[3] = f32::NAN;
        samples[6] = f32::NAN;
        samples[7] = f32::NAN;
        let mut grid = ElevationGrid::from_raster(&raster(4, 4, samples), 2);

        assert!(grid.height(1, 0).is_nan());
        grid.fill_missing();
        assert_eq!(grid.height(1, 0), 1.0);
    }

    #[test]
    fn fill_missing_carries_last_valid_in_scan_order() {
        let mut grid = ElevationGrid {
            size: 2,
            heights: vec![3.0, f32::NAN, f32::NAN, 8.0],
        };
        grid.fill_missing();
        assert_eq!(grid.heights, vec![3.0, 3.0, 3.0, 8.0]);
    }

    #[test]
    fn leading_gap_is_filled_from_the_first_valid_cell() {
        let mut grid = ElevationGrid {
            size: 2,
            heights: vec![f32::NAN, f32::NAN, 5.0, 6.0],
        };
        grid.fill_missing();
        assert_eq!(grid.heights, vec![5.0, 5.0, 5.0, 6.0]);
    }

    #[test]
    fn upsampling_degenerates_to_nearest_sampling() {
        let source = raster(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let grid = ElevationGrid::from_raster(&source, 4);

        assert_eq!(grid.height(0, 0), 1.0);
        assert_eq!(grid.height(3, 0), 2.0);
        assert_eq!(grid.height(0, 3), 3.0);
        assert_eq!(grid.height(3, 3), 4.0);
    }

    #[test]
    fn normalize_maps_heights_through_raster_bounds() {
        let mut bounds = ElevationBounds::new();
        bounds.update(0.0);
        bounds.update(10.0);

        let mut grid = ElevationGrid {
            size: 2,
            heights: vec![0.0, 2.5, 5.0, 10.0],
        };
        grid.normalize(&bounds);
        assert_eq!(grid.heights, vec![0.0, 0.25, 0.5, 1.0]);
    }
}
