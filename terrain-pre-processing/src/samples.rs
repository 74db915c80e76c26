/// Binary sample decoding for fixed-length PDS image records.
use crate::bounds::ElevationBounds;
use crate::pds::PdsLabel;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Full resolution DTM raster in line order.
/// Missing or out-of-range samples are masked as NaN.
pub struct DtmRaster {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<f32>,
}

impl DtmRaster {
    /// Decode every sample record described by the label.
    /// Applies the label's scaling factor and offset to valid samples
    /// and masks the rest as NaN.
    pub fn decode(bytes: &[u8], label: &PdsLabel) -> Result<Self, Box<dyn std::error::Error>> {
        let record_bytes = label.record_bytes()?;
        let lines = label.lines()?;
        let line_samples = label.line_samples()?;

        let sample_type = label.sample_type()?;
        if sample_type != "PC_REAL" {
            return Err(format!("unsupported SAMPLE_TYPE {sample_type}, expected PC_REAL").into());
        }
        if record_bytes < line_samples * 4 {
            return Err(format!(
                "RECORD_BYTES {record_bytes} too small for {line_samples} samples per line"
            )
            .into());
        }

        let scaling_factor = label.scaling_factor()?;
        let offset = label.offset()?;
        let valid_minimum = label.valid_minimum()?;
        let valid_maximum = label.valid_maximum()?;
        let missing_bytes = label.missing_constant_le_bytes()?;

        // Sample records start after the label records. Most products
        // carry an explicit ^IMAGE pointer, the label itself always
        // occupies record one.
        let image_record: usize = match label.get("^IMAGE") {
            Some(pointer) => pointer.parse()?,
            None => 2,
        };
        let data_start = image_record.saturating_sub(1) * record_bytes;
        let needed = lines * record_bytes;

        let data = bytes
            .get(data_start..)
            .ok_or("file ends before the first sample record")?;
        if data.len() < needed {
            return Err(format!(
                "file truncated: expected {needed} bytes of sample records, found {}",
                data.len()
            )
            .into());
        }

        let pb = ProgressBar::new(lines as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%) {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Decoding samples");

        let mut samples = Vec::with_capacity(lines * line_samples);
        for line in 0..lines {
            let record = &data[line * record_bytes..line * record_bytes + record_bytes];

            for raw in record[..line_samples * 4].chunks_exact(4) {
                let raw: [u8; 4] = [raw[0], raw[1], raw[2], raw[3]];

                // The sentinel is matched on raw bytes, never as a float.
                if missing_bytes == Some(raw) {
                    samples.push(f32::NAN);
                    continue;
                }

                let value = f32::from_le_bytes(raw);
                if value > valid_minimum && value < valid_maximum {
                    samples.push(value * scaling_factor + offset);
                } else {
                    samples.push(f32::NAN);
                }
            }

            if line % 1_000 == 0 {
                pb.set_position(line as u64);
            }
        }
        pb.finish_with_message("Samples decoded");

        Ok(Self {
            width: line_samples,
            height: lines,
            samples,
        })
    }

    /// Elevation at a raster position, NaN where data is missing.
    pub fn sample(&self, x: usize, y: usize) -> f32 {
        self.samples[y * self.width + x]
    }

    /// Calculate elevation bounds from all samples with parallel processing.
    /// Uses chunked parallel computation for efficient large raster handling.
    pub fn scan_bounds(&self) -> ElevationBounds {
        let pb = ProgressBar::new(self.samples.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} samples ({percent}%) {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Calculating bounds");

        let bounds = self
            .samples
            .par_chunks(25_000)
            .map(|chunk| {
                let mut local_bounds = ElevationBounds::new();
                for &sample in chunk {
                    if sample.is_nan() {
                        local_bounds.record_missing();
                    } else {
                        local_bounds.update(sample);
                    }
                }

                pb.inc(chunk.len() as u64);
                local_bounds
            })
            .reduce_with(ElevationBounds::merge)
            .unwrap_or_else(ElevationBounds::new);

        pb.finish_with_message("Bounds calculated");
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = "PDS_VERSION_ID            = PDS3\r\n\
        RECORD_TYPE               = FIXED_LENGTH\r\n\
        RECORD_BYTES              = 16\r\n\
        FILE_RECORDS              = 4\r\n\
        ^IMAGE                    = 2\r\n\
        OBJECT = IMAGE\r\n\
          LINES             = 3\r\n\
          LINE_SAMPLES      = 4\r\n\
          SAMPLE_TYPE       = PC_REAL\r\n\
          SAMPLE_BITS       = 32\r\n\
          SCALING_FACTOR    = 2.0\r\n\
          OFFSET            = 100.0\r\n\
          VALID_MINIMUM     = 16#FF7FFFFA#\r\n\
          VALID_MAXIMUM     = 16#7F7FFFFF#\r\n\
          MISSING_CONSTANT  = 16#FF7FFFFB#\r\n\
        END_OBJECT = IMAGE\r\n\
        END\r\n";

    /// Builds an in-memory product: one fake label record followed by
    /// the given sample values, one record per line.
    fn build_product(values: &[f32]) -> Vec<u8> {
        let mut bytes = vec![0u8; 16];
        for value in values {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn decodes_scaled_little_endian_samples() {
        let label = PdsLabel::parse(LABEL.as_bytes()).unwrap();
        let values: Vec<f32> = (0..12).map(|i| i as f32 * 0.5).collect();
        let raster = DtmRaster::decode(&build_product(&values), &label).unwrap();

        assert_eq!(raster.width, 4);
        assert_eq!(raster.height, 3);
        assert_eq!(raster.samples.len(), 12);
        // Raw 1.5 scaled by 2.0 and offset by 100.0.
        assert_eq!(raster.sample(3, 0), 103.0);
        assert_eq!(raster.sample(0, 1), 104.0);
    }

    #[test]
    fn missing_constant_masks_to_nan() {
        let label = PdsLabel::parse(LABEL.as_bytes()).unwrap();
        let mut values: Vec<f32> = vec![1.0; 12];
        values[5] = f32::from_bits(0xFF7FFFFB);
        let raster = DtmRaster::decode(&build_product(&values), &label).unwrap();

        assert!(raster.sample(1, 1).is_nan());
        assert_eq!(raster.sample(0, 0), 102.0);
    }

    #[test]
    fn out_of_valid_range_masks_to_nan() {
        let label = PdsLabel::parse(LABEL.as_bytes()).unwrap();
        let mut values: Vec<f32> = vec![1.0; 12];
        values[0] = -f32::MAX;
        let raster = DtmRaster::decode(&build_product(&values), &label).unwrap();

        assert!(raster.sample(0, 0).is_nan());
    }

    #[test]
    fn truncated_product_is_rejected() {
        let label = PdsLabel::parse(LABEL.as_bytes()).unwrap();
        let values: Vec<f32> = vec![1.0; 7];
        assert!(DtmRaster::decode(&build_product(&values), &label).is_err());
    }

    #[test]
    fn non_pc_real_samples_are_rejected() {
        let text = LABEL.replace("PC_REAL", "MSB_INTEGER");
        let label = PdsLabel::parse(text.as_bytes()).unwrap();
        let values: Vec<f32> = vec![1.0; 12];
        assert!(DtmRaster::decode(&build_product(&values), &label).is_err());
    }

    #[test]
    fn bounds_scan_tracks_extremes_and_missing() {
        let raster = DtmRaster {
            width: 3,
            height: 2,
            samples: vec![-2104.5, f32::NAN, -2099.0, -2101.0, f32::NAN, -2100.0],
        };
        let bounds = raster.scan_bounds();

        assert_eq!(bounds.min, -2104.5);
        assert_eq!(bounds.max, -2099.0);
        assert_eq!(bounds.valid_samples, 4);
        assert_eq!(bounds.missing_samples, 2);
    }
}
