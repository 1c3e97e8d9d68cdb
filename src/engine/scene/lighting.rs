use bevy::prelude::*;
use bevy::render::view::RenderLayers;

use crate::constants::{
    AMBIENT_BRIGHTNESS, CAPTURE_LAYER, FILL_LIGHT_ILLUMINANCE, FILL_LIGHT_POSITION,
    KEY_LIGHT_ILLUMINANCE, KEY_LIGHT_POSITION, VIEWPORT_LAYER,
};

/// Light both cursor copies identically: key and fill directional lights
/// aimed at the origin plus a dim ambient term. The lights sit on both
/// render layers so viewport and capture shading match.
pub fn spawn_lighting(commands: &mut Commands) {
    let shared_layers = RenderLayers::layer(VIEWPORT_LAYER).with(CAPTURE_LAYER);

    commands.spawn((
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        shared_layers.clone(),
    ));

    // Fill from below lifts the underside of the lower cone
    commands.spawn((
        DirectionalLight {
            illuminance: FILL_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(FILL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        shared_layers,
    ));

    commands.insert_resource(AmbientLight {
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}
