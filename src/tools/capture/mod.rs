//! Frame capture: a single-shot exporter plus a fixed-length rotation
//! sequence driver.
//!
//! ## Keyboard shortcuts
//!
//! - `S` — save the capture surface as it currently looks, one PNG
//! - `A` — run the full rotation session: 36 frames covering one turn,
//!   one PNG per frame, 300 ms apart
//!
//! ### Capture flow
//!
//! ```text
//! Keyboard input
//!   └─> CaptureSession::start()
//!       └─> drive_capture_session()      (once per engine update)
//!           ├─> rotate the capture rig to (frame / total) * 2π
//!           ├─> export_frame()           (screenshot readback → PNG)
//!           └─> wait FRAME_INTERVAL, repeat until the bound is reached
//! ```
//!
//! The session owns the capture rig's spin while it runs; the viewport copy
//! is only touched when a new session rewinds both rigs to frame zero. A
//! session cannot be cancelled — it ends when the frame bound is reached.

pub mod exporter;
pub mod sequencer;
pub mod session;

use bevy::prelude::*;

use sequencer::{drive_capture_session, handle_capture_shortcuts};
use session::CaptureSession;

pub struct CaptureToolPlugin;

impl Plugin for CaptureToolPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CaptureSession>().add_systems(
            Update,
            (handle_capture_shortcuts, drive_capture_session).chain(),
        );
    }
}
