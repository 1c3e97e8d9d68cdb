use bevy::prelude::*;

use super::exporter::export_frame;
use super::session::{CaptureSession, SessionTick};
use crate::engine::camera::capture_camera::CaptureTarget;
use crate::engine::scene::cursor::{CaptureCursor, CursorRig, cursor_spin_rotation};

/// Handle the two capture shortcuts. `S` saves a single frame of the capture
/// surface as it currently looks; `A` starts the rotation session. Starting
/// while a session runs does nothing.
pub fn handle_capture_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<CaptureSession>,
    mut commands: Commands,
    target: Res<CaptureTarget>,
    mut rigs: Query<&mut Transform, With<CursorRig>>,
) {
    if keyboard.just_pressed(KeyCode::KeyS) {
        // Single capture: named after the session counter, never mutates it
        export_frame(&mut commands, &target, session.current_frame());
    }

    if keyboard.just_pressed(KeyCode::KeyA) && session.start() {
        // Rewind both cursor copies to the frame-zero pose
        for mut transform in &mut rigs {
            transform.rotation = cursor_spin_rotation(0.0);
        }
        info!("capturing {} rotation frames", session.total_frames());
    }
}

/// Step the running session: rotate the capture rig, queue one export, wait
/// out the frame interval, repeat until the bound is reached. At most one
/// step fires per update, so exports never overlap.
pub fn drive_capture_session(
    time: Res<Time>,
    mut session: ResMut<CaptureSession>,
    mut commands: Commands,
    target: Res<CaptureTarget>,
    mut capture_rig: Query<&mut Transform, (With<CursorRig>, With<CaptureCursor>)>,
) {
    if !session.is_running() {
        return;
    }

    match session.advance(time.delta()) {
        Some(SessionTick::Step(step)) => {
            if let Ok(mut transform) = capture_rig.single_mut() {
                transform.rotation = cursor_spin_rotation(step.angle);
            }
            export_frame(&mut commands, &target, step.frame);
        }
        Some(SessionTick::Finished) => {
            info!("finished capturing all frames");
        }
        None => {}
    }
}
