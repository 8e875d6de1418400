//! A peg: LIFO stack of disks, narrowest on top.

use crate::config::MAX_DISKS;
use crate::error::TowerError;
use crate::solver::PegId;

use super::disk::Disk;

/// Stack of disks on one peg.
///
/// A wider disk is never stacked on a narrower one.
#[derive(Debug, Clone)]
pub struct Peg<H> {
    id: PegId,
    disks: heapless::Vec<Disk<H>, MAX_DISKS>,
}

impl<H: Copy> Peg<H> {
    /// Create an empty peg.
    pub fn new(id: PegId) -> Self {
        Self {
            id,
            disks: heapless::Vec::new(),
        }
    }

    /// Which peg this is.
    #[inline]
    pub fn id(&self) -> PegId {
        self.id
    }

    /// Number of disks on the peg.
    #[inline]
    pub fn height(&self) -> usize {
        self.disks.len()
    }

    /// Check if the peg holds no disks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disks bottom to top.
    #[inline]
    pub fn disks(&self) -> &[Disk<H>] {
        &self.disks
    }

    /// Topmost disk.
    #[inline]
    pub fn top(&self) -> Option<&Disk<H>> {
        self.disks.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Disk<H>> {
        self.disks.last_mut()
    }

    /// Take the top disk.
    pub fn pop(&mut self) -> Result<Disk<H>, TowerError> {
        self.disks.pop().ok_or(TowerError::EmptyPeg(self.id))
    }

    /// Place a disk on top.
    ///
    /// On failure the disk is handed back with the reason.
    pub fn push(&mut self, disk: Disk<H>) -> Result<(), (TowerError, Disk<H>)> {
        if let Some(top) = self.top() {
            if top.width() <= disk.width() {
                let err = TowerError::LargerOnSmaller {
                    peg: self.id,
                    width: disk.width().0,
                    top_width: top.width().0,
                };
                return Err((err, disk));
            }
        }

        let id = self.id;
        self.disks
            .push(disk)
            .map_err(|disk| (TowerError::PegFull(id), disk))
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = Disk<H>> + '_ {
        // Top first, like unstacking by hand
        core::iter::from_fn(move || self.disks.pop())
    }
}
