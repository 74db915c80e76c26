use bevy::prelude::*;

use constants::scene::{AVATAR_COLOR, AVATAR_SIZE, AVATAR_SPIN_STEP, rgb_components};

#[derive(Component)]
pub struct Avatar;

/// Spawn the avatar box at the origin.
pub fn spawn_avatar(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let [width, height, depth] = AVATAR_SIZE;
    let (r, g, b) = rgb_components(AVATAR_COLOR);

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(width, height, depth))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(r, g, b),
            ..default()
        })),
        Transform::default(),
        Avatar,
    ));
}

// Fixed yaw step per rendered frame, deliberately not time scaled
pub fn spin_avatar(mut avatars: Query<&mut Transform, With<Avatar>>) {
    for mut transform in &mut avatars {
        transform.rotate_y(AVATAR_SPIN_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_accumulates_yaw_per_call() {
        let mut transform = Transform::default();
        for _ in 0..100 {
            transform.rotate_y(AVATAR_SPIN_STEP);
        }

        let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - 1.0).abs() < 1e-3);
    }
}
