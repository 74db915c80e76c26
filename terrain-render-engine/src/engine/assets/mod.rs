//! Asset definitions for converted DTM products.
//!
//! Handles the conversion metadata that accompanies each heightmap texture.

/// DTM conversion metadata loaded as a JSON asset.
pub mod dtm_metadata;
