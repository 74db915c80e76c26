/// Metadata generation linking heightmap textures to their source DTM.
use crate::bounds::ElevationBounds;
use serde::{Deserialize, Serialize};
use std::fs;

/// Sidecar metadata for one processed DTM.
/// Carries everything the render engine needs to rebuild terrain
/// relief from the heightmap texture.
#[derive(Serialize, Deserialize, Debug)]
pub struct DtmMetadata {
    /// Source product the heightmap was derived from.
    pub source: String,
    /// Edge length of the square heightmap grid.
    pub grid_size: usize,
    /// Heightmap texture filename next to this metadata file.
    pub heightmap_file: String,
    /// Preview image filename next to this metadata file.
    pub preview_file: String,
    /// Elevation bounds of the source raster in metres.
    pub elevation: ElevationBounds,
}

/// Write metadata as pretty-printed JSON for easy inspection.
pub fn write_metadata(
    path: &str,
    metadata: &DtmMetadata,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> DtmMetadata {
        let mut elevation = ElevationBounds::new();
        elevation.update(-2104.5);
        elevation.update(-2099.0);
        elevation.record_missing();

        DtmMetadata {
            source: "DTEEC_041277_1985_040776_1985_L01.IMG".to_string(),
            grid_size: 128,
            heightmap_file: "mars_heightmap_128x128.dds".to_string(),
            preview_file: "mars_preview_128x128.png".to_string(),
            elevation,
        }
    }

    #[test]
    fn metadata_round_trips_through_json() {
        let metadata = sample_metadata();
        let json = serde_json::to_string_pretty(&metadata).unwrap();
        let parsed: DtmMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.source, metadata.source);
        assert_eq!(parsed.grid_size, 128);
        assert_eq!(parsed.heightmap_file, metadata.heightmap_file);
        assert_eq!(parsed.elevation.min, -2104.5);
        assert_eq!(parsed.elevation.max, -2099.0);
        assert_eq!(parsed.elevation.missing_samples, 1);
    }

    #[test]
    fn written_file_holds_parseable_json() {
        let path = std::env::temp_dir().join("terrain_metadata_roundtrip.json");
        let path = path.to_str().unwrap();

        write_metadata(path, &sample_metadata()).unwrap();

        let text = fs::read_to_string(path).unwrap();
        let parsed: DtmMetadata = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.grid_size, 128);

        fs::remove_file(path).unwrap();
    }
}
