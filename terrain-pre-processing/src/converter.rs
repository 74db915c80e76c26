/// Main DTM converter orchestrating decoding and heightmap generation.
use crate::bounds::ElevationBounds;
use crate::dds_writer::write_heightmap_dds;
use crate::grid::ElevationGrid;
use crate::metadata::{DtmMetadata, write_metadata};
use crate::pds::PdsLabel;
use crate::preview::write_preview_png;
use crate::raw::decode_raw_heightmap;
use crate::samples::DtmRaster;
use constants::asset_names::{heightmap_file_name, metadata_file_name, preview_file_name};
use constants::grid::HEIGHTMAP_SIZE;
use std::fs;
use std::path::{Path, PathBuf};

/// Digital terrain model converter for PDS '.IMG' products and raw
/// 16-bit heightmaps. Produces the heightmap texture, preview image
/// and metadata the render engine consumes.
pub struct DtmConverter {
    /// Source DTM file path.
    input_path: PathBuf,
    /// Output directory for preprocessed data.
    output_dir: PathBuf,
    /// Output name derived from the input filename.
    output_name: String,
}

impl DtmConverter {
    /// Create new converter instance for a single input file.
    pub fn new(input_path: &str, output_stem: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let input_path = PathBuf::from(input_path);
        if !input_path.exists() {
            return Err(format!("input file does not exist: {}", input_path.display()).into());
        }

        let output_dir = input_path.parent().unwrap_or(Path::new(".")).to_path_buf();

        Ok(Self {
            input_path,
            output_dir,
            output_name: output_stem.to_string(),
        })
    }

    /// Executes the complete preprocessing pipeline.
    /// Decodes the input, scans elevation bounds, downsamples to the
    /// render grid and saves texture, preview and metadata.
    pub fn convert(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "Converting {} to heightmap texture set ({}x{})...",
            self.input_path.display(),
            HEIGHTMAP_SIZE,
            HEIGHTMAP_SIZE
        );

        let bytes = fs::read(&self.input_path)?;
        let raster = self.decode_input(&bytes)?;

        let bounds = raster.scan_bounds();
        self.print_bounds(&bounds);

        if bounds.valid_samples == 0 {
            return Err("input holds no valid samples, nothing to convert".into());
        }

        println!(
            "Downsampling {}x{} raster to {}x{} grid...",
            raster.width, raster.height, HEIGHTMAP_SIZE, HEIGHTMAP_SIZE
        );
        let mut grid = ElevationGrid::from_raster(&raster, HEIGHTMAP_SIZE);
        grid.fill_missing();
        grid.normalize(&bounds);

        self.save_outputs(&grid, &bounds)?;

        println!("Conversion complete!");
        Ok(())
    }

    /// Decode the input file based on its extension.
    /// '.IMG' products carry a PDS label, '.raw' and '.gray' files are
    /// headerless 16-bit heightmaps.
    fn decode_input(&self, bytes: &[u8]) -> Result<DtmRaster, Box<dyn std::error::Error>> {
        let extension = self
            .input_path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "img" => {
                let label = PdsLabel::parse(bytes)?;
                self.log_label_info(&label);
                label.verify()?;
                println!("Label verified");
                DtmRaster::decode(bytes, &label)
            }
            "raw" | "gray" => decode_raw_heightmap(bytes),
            other => Err(format!(
                "unsupported input format '.{other}', expected .img, .raw or .gray"
            )
            .into()),
        }
    }

    /// Log label information for debugging.
    fn log_label_info(&self, label: &PdsLabel) {
        println!("PDS Label Information:");
        println!("  File: {}", self.input_path.display());
        if let Ok(lines) = label.lines() {
            println!("  Count of image lines: {}", lines);
        }
        if let Ok(line_samples) = label.line_samples() {
            println!("  Pixels per line: {}", line_samples);
        }
        if let Ok(record_bytes) = label.record_bytes() {
            println!("  Byte count per line: {}", record_bytes);
        }
        if let Ok(scaling_factor) = label.scaling_factor() {
            println!("  Scaling factor: {}", scaling_factor);
        }
        if let Ok(offset) = label.offset() {
            println!("  Offset: {}", offset);
        }
        println!();
    }

    /// Print elevation bounds information for validation.
    fn print_bounds(&self, bounds: &ElevationBounds) {
        println!("Elevation bounds:");
        println!(
            "  Range: {:.2} to {:.2} metres (span {:.2})",
            bounds.min,
            bounds.max,
            bounds.span()
        );
        println!(
            "  Samples: {} valid, {} missing",
            bounds.valid_samples, bounds.missing_samples
        );
    }

    /// Save heightmap texture, preview image and metadata with
    /// programmatic names next to the input file.
    fn save_outputs(
        &self,
        grid: &ElevationGrid,
        bounds: &ElevationBounds,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let heightmap_name = heightmap_file_name(&self.output_name, HEIGHTMAP_SIZE);
        let preview_name = preview_file_name(&self.output_name, HEIGHTMAP_SIZE);
        let metadata_name = metadata_file_name(&self.output_name, HEIGHTMAP_SIZE);

        let heightmap_path = self.output_dir.join(&heightmap_name);
        write_heightmap_dds(
            heightmap_path.to_str().unwrap(),
            HEIGHTMAP_SIZE,
            &grid.heights,
        )?;
        println!("Saved {} (R32F heightmap)", heightmap_path.display());

        let preview_path = self.output_dir.join(&preview_name);
        write_preview_png(preview_path.to_str().unwrap(), grid)?;
        println!("Saved {} (grayscale preview)", preview_path.display());

        let metadata = DtmMetadata {
            source: self
                .input_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            grid_size: HEIGHTMAP_SIZE,
            heightmap_file: heightmap_name,
            preview_file: preview_name,
            elevation: bounds.clone(),
        };

        let metadata_path = self.output_dir.join(&metadata_name);
        write_metadata(metadata_path.to_str().unwrap(), &metadata)?;
        println!("Saved {}", metadata_path.display());

        Ok(())
    }
}
