use bevy::input::mouse::MouseMotion;
use bevy::math::EulerRot;
use bevy::prelude::*;

use constants::scene::{CAMERA_START_POSITION, LOOK_SPEED, MOVEMENT_SPEED, PITCH_LIMIT};

/// Camera pose driven by keyboard and mouse input.
#[derive(Resource)]
pub struct FirstPersonController {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for FirstPersonController {
    fn default() -> Self {
        let [x, y, z] = CAMERA_START_POSITION;
        Self {
            position: Vec3::new(x, y, z),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut controller: ResMut<FirstPersonController>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    if let Ok(mut camera_transform) = camera_query.single_mut() {
        // Read mouse motion
        let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

        // Mouse motion with right click (look around)
        if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
            let look_delta = LOOK_SPEED * time.delta_secs();
            controller.yaw += -mouse_delta.x * look_delta;
            controller.pitch += -mouse_delta.y * look_delta;
            controller.pitch = controller.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        // Keyboard movement input
        let mut move_input = Vec3::ZERO;
        if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
            move_input.z -= 1.0;
        }
        if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
            move_input.z += 1.0;
        }
        if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
            move_input.x += 1.0;
        }
        if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
            move_input.x -= 1.0;
        }
        if keyboard.pressed(KeyCode::KeyR) {
            move_input.y += 1.0; // Up
        }
        if keyboard.pressed(KeyCode::KeyF) {
            move_input.y -= 1.0; // Down
        }

        let view_rot = Quat::from_euler(EulerRot::YXZ, controller.yaw, controller.pitch, 0.0);

        if move_input != Vec3::ZERO {
            let forward = (view_rot * Vec3::Z).normalize();
            let right = (view_rot * Vec3::X).normalize();
            let up = Vec3::Y;

            let world_delta = right * move_input.x + up * move_input.y + forward * move_input.z;
            controller.position += world_delta.normalize() * MOVEMENT_SPEED * time.delta_secs();
        }

        camera_transform.translation = controller.position;
        camera_transform.rotation = view_rot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_starts_at_camera_position() {
        let controller = FirstPersonController::default();
        assert_eq!(controller.position, Vec3::new(0.0, 2.0, 6.0));
        assert_eq!(controller.yaw, 0.0);
        assert_eq!(controller.pitch, 0.0);
    }

    #[test]
    fn identity_view_looks_down_negative_z() {
        let controller = FirstPersonController::default();
        let view_rot = Quat::from_euler(EulerRot::YXZ, controller.yaw, controller.pitch, 0.0);
        let forward = view_rot * Vec3::Z;
        // Pressing W subtracts along this axis, which walks towards -Z.
        assert!((forward - Vec3::Z).length() < 1e-6);
    }
}
