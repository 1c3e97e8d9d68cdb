use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::camera::{RenderTarget, ScalingMode};
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat, TextureUsages};
use bevy::render::view::RenderLayers;

use crate::constants::{CAMERA_EYE, CAPTURE_LAYER, CAPTURE_SIZE, CAPTURE_VIEW_EXTENT};

/// Handle to the fixed-size off-screen surface the capture camera draws into.
/// Window resizes never touch it.
#[derive(Resource)]
pub struct CaptureTarget {
    pub image: Handle<Image>,
}

/// Spawn the orthographic capture camera and its render target. Orthographic
/// so exported frames carry no perspective distortion; the target clears to
/// fully transparent so frames keep their alpha.
pub fn spawn_capture_camera(commands: &mut Commands, images: &mut Assets<Image>) {
    let target = create_capture_surface(images);

    commands.spawn((
        Camera3d::default(),
        Camera {
            target: RenderTarget::Image(target.clone().into()),
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::Orthographic(OrthographicProjection {
            near: 0.1,
            far: 100.0,
            scaling_mode: ScalingMode::Fixed {
                width: CAPTURE_VIEW_EXTENT,
                height: CAPTURE_VIEW_EXTENT,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(CAMERA_EYE).looking_at(Vec3::ZERO, Vec3::Y),
        RenderLayers::layer(CAPTURE_LAYER),
    ));

    commands.insert_resource(CaptureTarget { image: target });
}

/// Allocate the capture surface: a render attachment for the camera that the
/// screenshot readback can copy out of.
fn create_capture_surface(images: &mut Assets<Image>) -> Handle<Image> {
    let extent = Extent3d {
        width: CAPTURE_SIZE,
        height: CAPTURE_SIZE,
        depth_or_array_layers: 1,
    };

    let mut surface = Image::new_fill(
        extent,
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    surface.texture_descriptor.usage = TextureUsages::TEXTURE_BINDING
        | TextureUsages::COPY_DST
        | TextureUsages::COPY_SRC
        | TextureUsages::RENDER_ATTACHMENT;

    images.add(surface)
}
