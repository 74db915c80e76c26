/// Raw 16-bit heightmap ingestion.
use crate::samples::DtmRaster;
use constants::grid::HEIGHTMAP_SIZE;

/// Decode a headerless heightmap of 16-bit little-endian samples.
/// The file holds a full 128x128 grid in row order, each sample is
/// normalised to the 0-1 range.
pub fn decode_raw_heightmap(bytes: &[u8]) -> Result<DtmRaster, Box<dyn std::error::Error>> {
    let size = HEIGHTMAP_SIZE;
    let needed = size * size * 2;

    if bytes.len() < needed {
        return Err(format!(
            "raw heightmap truncated: expected {needed} bytes, found {}",
            bytes.len()
        )
        .into());
    }

    let mut samples = Vec::with_capacity(size * size);
    for raw in bytes[..needed].chunks_exact(2) {
        let value = u16::from_le_bytes([raw[0], raw[1]]);
        samples.push(value as f32 / 65535.0);
    }

    Ok(DtmRaster {
        width: size,
        height: size,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_raw(values: impl Iterator<Item = u16>) -> Vec<u8> {
        let mut bytes = Vec::new();
        for value in values {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn decodes_row_order_normalised_samples() {
        let size = HEIGHTMAP_SIZE;
        let bytes = build_raw((0..size * size).map(|i| i as u16));
        let raster = decode_raw_heightmap(&bytes).unwrap();

        assert_eq!(raster.width, size);
        assert_eq!(raster.height, size);
        assert_eq!(raster.sample(0, 0), 0.0);
        assert_eq!(raster.sample(1, 0), 1.0 / 65535.0);
        // Row stride is the grid width.
        assert_eq!(raster.sample(0, 1), size as f32 / 65535.0);
    }

    #[test]
    fn full_scale_sample_normalises_to_one() {
        let size = HEIGHTMAP_SIZE;
        let bytes = build_raw(std::iter::repeat(u16::MAX).take(size * size));
        let raster = decode_raw_heightmap(&bytes).unwrap();
        assert_eq!(raster.sample(63, 63), 1.0);
    }

    #[test]
    fn truncated_file_is_rejected() {
        let bytes = build_raw((0..100).map(|i| i as u16));
        assert!(decode_raw_heightmap(&bytes).is_err());
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let size = HEIGHTMAP_SIZE;
        let mut bytes = build_raw((0..size * size).map(|_| 7u16));
        bytes.extend_from_slice(&[1, 2, 3]);
        let raster = decode_raw_heightmap(&bytes).unwrap();
        assert_eq!(raster.samples.len(), size * size);
    }
}
