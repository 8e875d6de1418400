//! The three-peg layout.

use crate::config::units::Pixels;
use crate::config::HanoiConfig;
use crate::error::Result;
use crate::motion::Point;
use crate::render::Renderer;
use crate::solver::{Move, PegId, PEG_COUNT};

use super::disk::{Disk, DiskId};
use super::peg::Peg;

/// Three pegs and the disks they hold.
#[derive(Debug, Clone)]
pub struct Tower<H> {
    pegs: [Peg<H>; PEG_COUNT],
}

impl<H: Copy> Default for Tower<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<H: Copy> Tower<H> {
    /// Create a tower with no disks.
    pub fn empty() -> Self {
        Self {
            pegs: PegId::ALL.map(Peg::new),
        }
    }

    /// Stack up to `count` disks on the left peg, widest at the bottom.
    ///
    /// Each disk is drawn through `renderer` as it is created. The stack is
    /// silently shorter than `count` when disk widths run out.
    pub fn build<R>(config: &HanoiConfig, count: usize, renderer: &mut R) -> Self
    where
        R: Renderer<Handle = H>,
    {
        let mut tower = Self::empty();
        let geometry = &config.geometry;
        let start = &mut tower.pegs[PegId::Left.index()];

        for (i, width) in config.disks.widths(count).enumerate() {
            let position = Point::new(
                geometry.disk_x(PegId::Left, width),
                geometry.rest_y(start.height() + 1),
            );
            let (x, y) = position.rounded();
            let handle = renderer.create_disk(Pixels(width), x, y);
            let disk = Disk::new(DiskId(i as u8), Pixels(width), position, handle);
            if start.push(disk).is_err() {
                break;
            }
        }

        #[cfg(feature = "defmt")]
        {
            if start.height() < count {
                defmt::debug!("tower truncated to {} of {} disks", start.height(), count);
            }
        }

        tower
    }

    /// Get a peg.
    #[inline]
    pub fn peg(&self, id: PegId) -> &Peg<H> {
        &self.pegs[id.index()]
    }

    /// All pegs, left to right.
    #[inline]
    pub fn pegs(&self) -> &[Peg<H>; PEG_COUNT] {
        &self.pegs
    }

    /// Number of disks on each peg.
    pub fn heights(&self) -> [usize; PEG_COUNT] {
        [
            self.pegs[0].height(),
            self.pegs[1].height(),
            self.pegs[2].height(),
        ]
    }

    /// Total number of disks.
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Peg::height).sum()
    }

    /// Check if every disk sits on `peg`.
    pub fn is_gathered_on(&self, peg: PegId) -> bool {
        self.peg(peg).height() == self.disk_count()
    }

    /// Move the top disk of `mv.from` onto `mv.to`.
    ///
    /// Only occupancy changes; the disk keeps its position until animated.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is empty or the destination top disk
    /// is narrower. The tower is left unchanged on error.
    pub fn transfer(&mut self, mv: Move) -> Result<()> {
        let disk = self.pegs[mv.from.index()].pop()?;
        match self.pegs[mv.to.index()].push(disk) {
            Ok(()) => Ok(()),
            Err((err, disk)) => {
                let restored = self.pegs[mv.from.index()].push(disk);
                debug_assert!(restored.is_ok(), "disk must fit back on its source peg");
                Err(err.into())
            }
        }
    }

    pub(crate) fn top_mut(&mut self, peg: PegId) -> Option<&mut Disk<H>> {
        self.pegs[peg.index()].top_mut()
    }

    /// Remove every disk, erasing each through `renderer`.
    pub fn clear<R>(&mut self, renderer: &mut R)
    where
        R: Renderer<Handle = H>,
    {
        for peg in self.pegs.iter_mut() {
            for disk in peg.drain() {
                renderer.remove_disk(disk.handle());
            }
        }
    }
}
