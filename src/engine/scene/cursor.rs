/// Bi-cone cursor construction, spawned once per render layer
use bevy::prelude::*;
use bevy::render::view::RenderLayers;

use crate::constants::{
    CAPTURE_LAYER, CONE_SEGMENTS, CURSOR_METALLIC, CURSOR_RADIUS, CURSOR_ROUGHNESS, CURSOR_SCALE,
    CURSOR_TILT, LOWER_CONE_HEIGHT, UPPER_CONE_HEIGHT, VIEWPORT_LAYER,
};

/// Spin target of one cursor copy. Its rotation combines the Y spin with the
/// fixed sideways tilt.
#[derive(Component)]
pub struct CursorRig;

/// Marker for the copy shown in the interactive viewport.
#[derive(Component)]
pub struct ViewportCursor;

/// Marker for the copy rendered to the off-screen capture surface.
#[derive(Component)]
pub struct CaptureCursor;

/// Rig rotation at a given spin angle about the vertical axis. Composed as
/// intrinsic XYZ so the Z tilt survives every spin update.
pub fn cursor_spin_rotation(angle: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, 0.0, angle, CURSOR_TILT)
}

/// Build both cursor copies: one on the viewport layer, one independently
/// owned duplicate on the capture layer. Meshes and the steel material are
/// shared handles; nothing mutable is shared after spawn.
pub fn spawn_cursor_rigs(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let upper_cone = meshes.add(
        Cone {
            radius: CURSOR_RADIUS,
            height: UPPER_CONE_HEIGHT,
        }
        .mesh()
        .resolution(CONE_SEGMENTS),
    );
    let lower_cone = meshes.add(
        Cone {
            radius: CURSOR_RADIUS,
            height: LOWER_CONE_HEIGHT,
        }
        .mesh()
        .resolution(CONE_SEGMENTS),
    );

    // Bright red polished steel, shared by all four cones
    let steel = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xcc, 0x14, 0x14),
        metallic: CURSOR_METALLIC,
        perceptual_roughness: CURSOR_ROUGHNESS,
        ..default()
    });

    spawn_cursor_rig(
        commands,
        upper_cone.clone(),
        lower_cone.clone(),
        steel.clone(),
        RenderLayers::layer(VIEWPORT_LAYER),
        ViewportCursor,
    );
    spawn_cursor_rig(
        commands,
        upper_cone,
        lower_cone,
        steel,
        RenderLayers::layer(CAPTURE_LAYER),
        CaptureCursor,
    );
}

fn spawn_cursor_rig(
    commands: &mut Commands,
    upper_cone: Handle<Mesh>,
    lower_cone: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    layers: RenderLayers,
    marker: impl Component,
) {
    // Outer container carries scale only; the rig inside owns rotation
    commands
        .spawn((
            Transform::from_scale(Vec3::splat(CURSOR_SCALE)),
            Visibility::default(),
        ))
        .with_children(|container| {
            container
                .spawn((
                    Transform::from_rotation(cursor_spin_rotation(0.0)),
                    Visibility::default(),
                    CursorRig,
                    marker,
                ))
                .with_children(|rig| {
                    // Upper cone, base resting on y = 0
                    rig.spawn((
                        Mesh3d(upper_cone),
                        MeshMaterial3d(material.clone()),
                        Transform::from_xyz(0.0, UPPER_CONE_HEIGHT / 2.0, 0.0),
                        layers.clone(),
                    ));
                    // Lower cone, inverted so its base meets the upper one
                    rig.spawn((
                        Mesh3d(lower_cone),
                        MeshMaterial3d(material),
                        Transform::from_xyz(0.0, -LOWER_CONE_HEIGHT / 2.0, 0.0)
                            .with_rotation(Quat::from_rotation_x(std::f32::consts::PI)),
                        layers,
                    ));
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_zero_pose_is_tilt_only() {
        let pose = cursor_spin_rotation(0.0);
        assert!(pose.angle_between(Quat::from_rotation_z(CURSOR_TILT)) < 1e-6);
    }

    #[test]
    fn spin_preserves_tilt() {
        let (x, y, z) = cursor_spin_rotation(1.3).to_euler(EulerRot::XYZ);
        assert!(x.abs() < 1e-5);
        assert!((y - 1.3).abs() < 1e-5);
        assert!((z - CURSOR_TILT).abs() < 1e-5);
    }
}
