/// Shared configuration for the cursor scene and the capture pipeline
use bevy::math::Vec3;
use std::time::Duration;

/// Base radius shared by both halves of the bi-cone (world units)
pub const CURSOR_RADIUS: f32 = 1.0;

/// Height of the upward-pointing cone
pub const UPPER_CONE_HEIGHT: f32 = 2.0;

/// Height of the inverted lower cone
pub const LOWER_CONE_HEIGHT: f32 = 1.0;

/// Radial segments used when tessellating both cones
pub const CONE_SEGMENTS: u32 = 32;

/// Sideways lean of the cursor, radians about the Z axis
pub const CURSOR_TILT: f32 = std::f32::consts::PI / 10.0;

/// Uniform scale applied to the assembled cursor
pub const CURSOR_SCALE: f32 = 1.0;

/// Metallic term of the polished steel material
pub const CURSOR_METALLIC: f32 = 0.9;

/// Perceptual roughness of the polished steel material
pub const CURSOR_ROUGHNESS: f32 = 0.2;

/// Render layer of the interactive scene copy
pub const VIEWPORT_LAYER: usize = 0;

/// Render layer of the off-screen capture copy
pub const CAPTURE_LAYER: usize = 1;

/// Shared eye position for the viewport and capture cameras
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.5, 6.0);

/// Vertical field of view of the interactive viewport camera, degrees
pub const VIEWPORT_FOV_DEGREES: f32 = 75.0;

/// Key light placement, aimed at the origin
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(3.5, 5.0, 2.0);

/// Fill light placement, angled to illuminate the lower cone
pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(3.5, -2.0, 2.0);

/// Key light strength (lux)
pub const KEY_LIGHT_ILLUMINANCE: f32 = 8_000.0;

/// Fill light strength (lux)
pub const FILL_LIGHT_ILLUMINANCE: f32 = 4_000.0;

/// Ambient term for overall illumination
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

/// Edge length of the square capture surface, pixels (standard cursor size)
pub const CAPTURE_SIZE: u32 = 32;

/// Width and height of the orthographic capture volume, world units
pub const CAPTURE_VIEW_EXTENT: f32 = 4.0;

/// Frames captured for one full revolution
pub const TOTAL_FRAMES: u32 = 36;

/// Pause between capture steps, so successive frame writes do not pile up
pub const FRAME_INTERVAL: Duration = Duration::from_millis(300);
