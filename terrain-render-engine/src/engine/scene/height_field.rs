use constants::grid::{HEIGHT_FORMULA_DIVISOR, ORIGIN_ELEVATION};

/// Per-vertex elevations of the terrain, stored row-major with the
/// x index outermost: vertex (i, j) lives at `i * rows + j`.
pub struct HeightField {
    columns: usize,
    rows: usize,
    elevations: Vec<f32>,
}

impl HeightField {
    /// Generate the procedural relief for a grid of cells_x by cells_z cells.
    ///
    /// Every vertex gets sin((i*i + j*j) / divisor), then the origin vertex
    /// is overwritten with a fixed dip.
    pub fn generate(cells_x: usize, cells_z: usize) -> Self {
        let columns = cells_x + 1;
        let rows = cells_z + 1;
        let mut elevations = Vec::with_capacity(columns * rows);

        for i in 0..columns {
            for j in 0..rows {
                let distance_sq = (i * i + j * j) as f32;
                elevations.push((distance_sq / HEIGHT_FORMULA_DIVISOR).sin());
            }
        }

        elevations[0] = ORIGIN_ELEVATION;

        Self {
            columns,
            rows,
            elevations,
        }
    }

    /// Wrap precomputed elevations, e.g. resampled from a DTM heightmap.
    pub fn from_elevations(columns: usize, rows: usize, elevations: Vec<f32>) -> Self {
        Self {
            columns,
            rows,
            elevations,
        }
    }

    /// Vertices along the x axis
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Vertices along the z axis
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn elevation(&self, i: usize, j: usize) -> f32 {
        self.elevations[i * self.rows + j]
    }
}
