/// Ambient light colour (sRGB hex)
pub const AMBIENT_LIGHT_COLOR: u32 = 0xcccccc;

/// Ambient light brightness in lux
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 300.0;

/// Directional light colour (sRGB hex)
pub const DIRECTIONAL_LIGHT_COLOR: u32 = 0xabffe4;

/// Directional light position; the light aims from here at the origin
pub const DIRECTIONAL_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 10.0];

/// Avatar box dimensions (width, height, depth)
pub const AVATAR_SIZE: [f32; 3] = [1.0, 3.0, 1.0];

/// Avatar material colour (sRGB hex)
pub const AVATAR_COLOR: u32 = 0xaadddd;

/// Avatar yaw increment per rendered frame (radians)
pub const AVATAR_SPIN_STEP: f32 = 0.01;

/// Terrain material base colour (sRGB hex)
pub const TERRAIN_COLOR: u32 = 0x992222;

/// Vertical field of view of the viewer camera (degrees)
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

/// Camera near clip plane (metres)
pub const CAMERA_NEAR: f32 = 1.0;

/// Camera far clip plane (metres)
pub const CAMERA_FAR: f32 = 10000.0;

/// Camera starting position above the terrain
pub const CAMERA_START_POSITION: [f32; 3] = [0.0, 2.0, 6.0];

/// First-person movement speed (metres per second)
pub const MOVEMENT_SPEED: f32 = 20.0;

/// Mouse look speed factor, applied as offset * speed * frame delta
pub const LOOK_SPEED: f32 = 0.05;

/// Pitch clamp keeping the camera short of straight up or down (radians)
pub const PITCH_LIMIT: f32 = 1.54;

/// Split a 0xRRGGBB hex colour into its sRGB byte components
pub const fn rgb_components(hex: u32) -> (u8, u8, u8) {
    (
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}
