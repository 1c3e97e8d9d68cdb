use std::path::{Path, PathBuf};

use bevy::image::IntoDynamicImageError;
use bevy::prelude::*;
use bevy::render::view::screenshot::{Screenshot, ScreenshotCaptured};
use thiserror::Error;

use crate::engine::camera::capture_camera::CaptureTarget;

/// Literal prefix of every exported frame
const FRAME_FILE_PREFIX: &str = "cursor_";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("captured frame is not convertible to an RGBA image: {0}")]
    Convert(#[from] IntoDynamicImageError),
    #[error("png write failed: {0}")]
    Write(#[from] image::ImageError),
}

/// File name for a frame index, zero-padded to two digits minimum so an
/// alphabetical listing matches capture order.
pub fn frame_filename(frame: u32) -> String {
    format!("{FRAME_FILE_PREFIX}{frame:02}.png")
}

/// Queue one export of the capture surface. The screenshot readback lands a
/// few render frames later; the observer writes the PNG when it does.
pub fn export_frame(commands: &mut Commands, target: &CaptureTarget, frame: u32) {
    let path = PathBuf::from(frame_filename(frame));
    commands
        .spawn(Screenshot::image(target.image.clone()))
        .observe(save_frame_to_disk(path));

    if frame == 0 {
        log_theme_recipe();
    }
}

/// Observer for one queued export: encode the readback as PNG and write it
/// out. Failures are logged and dropped; a frame is never retried.
fn save_frame_to_disk(path: PathBuf) -> impl FnMut(Trigger<ScreenshotCaptured>) {
    move |trigger| match write_frame_png(trigger.event().0.clone(), &path) {
        Ok(()) => info!("saved {}", path.display()),
        Err(err) => error!("could not save {}: {err}", path.display()),
    }
}

/// Convert a captured surface to RGBA8 and encode it as a PNG at `path`,
/// keeping the transparent background.
fn write_frame_png(captured: Image, path: &Path) -> Result<(), ExportError> {
    let rgba = captured.try_into_dynamic()?.to_rgba8();
    rgba.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// The conversion recipe this tool feeds, printed with the first frame
fn log_theme_recipe() {
    info!("To create a GNOME cursor from these images:");
    info!("1. Install xcursorgen: sudo apt-get install xcursorgen");
    info!("2. Create a config file named red_cursor.config with the content:");
    info!("   24 0 0 cursor_00.png 10");
    info!("3. Run: xcursorgen red_cursor.config red_cursor");
    info!("4. Copy the resulting file to ~/.icons/default/cursors/");
    info!("5. Update your cursor theme in GNOME Settings");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

    fn solid_capture(width: u32, height: u32, pixel: [u8; 4]) -> Image {
        Image::new_fill(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &pixel,
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::all(),
        )
    }

    mod filenames {
        use super::super::frame_filename;

        #[test]
        fn pads_to_two_digits() {
            assert_eq!(frame_filename(0), "cursor_00.png");
            assert_eq!(frame_filename(9), "cursor_09.png");
            assert_eq!(frame_filename(35), "cursor_35.png");
        }

        #[test]
        fn wide_indices_keep_all_their_digits() {
            assert_eq!(frame_filename(100), "cursor_100.png");
        }

        #[test]
        fn listing_order_matches_frame_order() {
            let names: Vec<String> = (0..36).map(frame_filename).collect();
            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(names, sorted);
        }
    }

    mod png_writing {
        use super::*;

        #[test]
        fn writes_a_decodable_png_and_keeps_alpha() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join(frame_filename(0));

            write_frame_png(solid_capture(32, 32, [204, 20, 20, 0]), &path).unwrap();

            let decoded = image::open(&path).unwrap().to_rgba8();
            assert_eq!(decoded.dimensions(), (32, 32));
            assert_eq!(decoded.get_pixel(16, 16).0, [204, 20, 20, 0]);
        }

        #[test]
        fn output_carries_the_png_signature() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join(frame_filename(1));

            write_frame_png(solid_capture(4, 4, [0, 0, 0, 255]), &path).unwrap();

            let bytes = std::fs::read(&path).unwrap();
            assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        }
    }
}
