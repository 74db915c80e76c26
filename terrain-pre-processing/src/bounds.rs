/// Elevation bounds tracking and normalisation over DTM samples
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevationBounds {
    pub min: f32,
    pub max: f32,
    pub valid_samples: usize,
    pub missing_samples: usize,
}

impl ElevationBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
            valid_samples: 0,
            missing_samples: 0,
        }
    }

    /// Update bounds with a valid elevation sample
    pub fn update(&mut self, elevation: f32) {
        self.min = self.min.min(elevation);
        self.max = self.max.max(elevation);
        self.valid_samples += 1;
    }

    /// Record a masked sample without touching the range
    pub fn record_missing(&mut self) {
        self.missing_samples += 1;
    }

    /// Merge bounds computed over separate sample chunks
    pub fn merge(mut self, other: Self) -> Self {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.valid_samples += other.valid_samples;
        self.missing_samples += other.missing_samples;
        self
    }

    /// Elevation span in metres, zero until a valid sample was seen
    pub fn span(&self) -> f32 {
        if self.valid_samples == 0 {
            0.0
        } else {
            self.max - self.min
        }
    }

    /// Normalise an elevation to the 0-1 range
    pub fn normalize(&self, elevation: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((elevation - self.min) / span).clamp(0.0, 1.0)
    }
}
