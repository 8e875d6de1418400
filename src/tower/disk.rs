//! A single disk.

use crate::config::units::Pixels;
use crate::motion::Point;

/// Creation order of a disk; 0 is the widest (bottom) disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiskId(pub u8);

/// A disk owned by whichever peg currently holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Disk<H> {
    id: DiskId,
    width: Pixels,
    /// Unrounded top-left corner.
    position: Point,
    handle: H,
}

impl<H: Copy> Disk<H> {
    pub(crate) fn new(id: DiskId, width: Pixels, position: Point, handle: H) -> Self {
        Self {
            id,
            width,
            position,
            handle,
        }
    }

    /// Creation order.
    #[inline]
    pub fn id(&self) -> DiskId {
        self.id
    }

    /// Disk width.
    #[inline]
    pub fn width(&self) -> Pixels {
        self.width
    }

    /// Current top-left corner, unrounded.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Renderer handle.
    #[inline]
    pub fn handle(&self) -> H {
        self.handle
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
