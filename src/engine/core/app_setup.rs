use bevy::prelude::*;
use bevy::window::PresentMode;

use crate::constants::TOTAL_FRAMES;
use crate::engine::camera::capture_camera::spawn_capture_camera;
use crate::engine::camera::viewport_camera::spawn_viewport_camera;
use crate::engine::scene::cursor::spawn_cursor_rigs;
use crate::engine::scene::lighting::spawn_lighting;
use crate::tools::capture::CaptureToolPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(CaptureToolPlugin)
        .add_systems(Startup, setup);

    app
}

/// Startup system: cursor copies, lights, cameras, instruction overlay
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    spawn_cursor_rigs(&mut commands, &mut meshes, &mut materials);
    spawn_lighting(&mut commands);
    spawn_viewport_camera(&mut commands);
    spawn_capture_camera(&mut commands, &mut images);
    spawn_instructions_overlay(&mut commands);
}

fn spawn_instructions_overlay(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!(
                    "Cursor Capture Tool\n\
                     Press S to capture the current frame\n\
                     Press A to capture {TOTAL_FRAMES} frames for animation"
                )),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(10.0),
                    left: Val::Px(10.0),
                    ..default()
                },
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    DefaultPlugins.set(window_config)
}

fn create_window_config() -> Window {
    Window {
        title: "Cursor Capture Tool".into(),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
