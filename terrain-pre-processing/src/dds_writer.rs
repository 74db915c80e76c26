use ddsfile::{AlphaMode, D3D10ResourceDimension, Dds, DxgiFormat, NewDxgiParams};

/// Write a square elevation grid as a single-channel R32F DDS texture.
pub fn write_heightmap_dds(
    path: &str,
    size: usize,
    heights: &[f32],
) -> Result<(), Box<dyn std::error::Error>> {
    if heights.len() != size * size {
        return Err(format!(
            "heightmap data has {} values, expected {} for a {size}x{size} texture",
            heights.len(),
            size * size
        )
        .into());
    }

    let mut bytes = Vec::with_capacity(heights.len() * 4);
    for &height in heights {
        bytes.extend_from_slice(&height.to_le_bytes());
    }

    let params = NewDxgiParams {
        height: size as u32,
        width: size as u32,
        depth: None,
        format: DxgiFormat::R32_Float,
        mipmap_levels: Some(1),
        array_layers: Some(1),
        caps2: None,
        is_cubemap: false,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Unknown,
    };

    let mut dds = Dds::new_dxgi(params)?;
    dds.data = bytes;
    dds.write(&mut std::fs::File::create(path)?)?;
    Ok(())
}
