/// Ground texture path, resolved against the asset root
pub const TERRAIN_TEXTURE_PATH: &str = "textures/red1.png";

/// Directory of converted DTM products, resolved against the asset root
pub const DTM_ASSET_DIR: &str = "dtm";

/// Heightmap texture file name for a given output stem (R32F DDS)
pub fn heightmap_file_name(stem: &str, size: usize) -> String {
    format!("{}_heightmap_{}x{}.dds", stem, size, size)
}

/// Metadata file name for a given output stem (JSON)
pub fn metadata_file_name(stem: &str, size: usize) -> String {
    format!("{}_metadata_{}x{}.json", stem, size, size)
}

/// Preview image file name for a given output stem (8-bit grayscale PNG)
pub fn preview_file_name(stem: &str, size: usize) -> String {
    format!("{}_preview_{}x{}.png", stem, size, size)
}
