use bevy::prelude::*;
use bevy::render::view::RenderLayers;

use crate::constants::{CAMERA_EYE, VIEWPORT_FOV_DEGREES, VIEWPORT_LAYER};

/// Spawn the perspective camera that draws the interactive scene to the
/// primary window. Clears to opaque black; projection aspect and surface
/// size follow window resizes through the engine's own camera systems.
pub fn spawn_viewport_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: VIEWPORT_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_EYE).looking_at(Vec3::ZERO, Vec3::Y),
        RenderLayers::layer(VIEWPORT_LAYER),
    ));
}
