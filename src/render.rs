//! Renderer collaborator.
//!
//! The engine pushes disk creation, positions and status text out through
//! this trait and never reads anything back.

use crate::config::units::Pixels;
use crate::playback::Status;

/// Drawing surface the engine writes to.
///
/// Coordinates are whole pixels of a disk's top-left corner; the engine
/// keeps unrounded positions internally and rounds only here.
pub trait Renderer {
    /// Handle identifying a drawn disk.
    type Handle: Copy;

    /// Draw a new disk and return its handle.
    fn create_disk(&mut self, width: Pixels, x: i32, y: i32) -> Self::Handle;

    /// Move a drawn disk.
    fn set_disk_position(&mut self, disk: Self::Handle, x: i32, y: i32);

    /// Erase a drawn disk.
    fn remove_disk(&mut self, disk: Self::Handle);

    /// Status text changed.
    fn status_changed(&mut self, _status: &Status) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Handle = R::Handle;

    fn create_disk(&mut self, width: Pixels, x: i32, y: i32) -> Self::Handle {
        (**self).create_disk(width, x, y)
    }

    fn set_disk_position(&mut self, disk: Self::Handle, x: i32, y: i32) {
        (**self).set_disk_position(disk, x, y)
    }

    fn remove_disk(&mut self, disk: Self::Handle) {
        (**self).remove_disk(disk)
    }

    fn status_changed(&mut self, status: &Status) {
        (**self).status_changed(status)
    }
}

/// Renderer that draws nothing, for headless playback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    type Handle = ();

    fn create_disk(&mut self, _width: Pixels, _x: i32, _y: i32) {}

    fn set_disk_position(&mut self, _disk: (), _x: i32, _y: i32) {}

    fn remove_disk(&mut self, _disk: ()) {}
}
