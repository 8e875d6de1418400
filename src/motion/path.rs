//! Path building: one move becomes three legs.

use crate::config::units::PixelsPerSec;
use crate::config::Geometry;
use crate::solver::Move;
use crate::tower::Disk;

use super::leg::{Leg, LegKind};
use super::point::Point;

/// Every move is animated as exactly this many legs.
pub const LEGS_PER_MOVE: usize = 3;

/// Turns moves into lift/traverse/descend legs for fixed geometry and speed.
#[derive(Debug, Clone, Copy)]
pub struct PathBuilder<'a> {
    geometry: &'a Geometry,
    speed: PixelsPerSec,
}

impl<'a> PathBuilder<'a> {
    /// Create a builder for a board and disk speed.
    pub fn new(geometry: &'a Geometry, speed: PixelsPerSec) -> Self {
        Self { geometry, speed }
    }

    /// Disk speed used for leg durations.
    #[inline]
    pub fn speed(&self) -> PixelsPerSec {
        self.speed
    }

    /// Build the legs for `mv`.
    ///
    /// `disk` is the disk being moved, still at its old position;
    /// `destination_height` is the destination peg's height including it.
    pub fn build<H: Copy>(
        &self,
        mv: Move,
        disk: &Disk<H>,
        destination_height: usize,
    ) -> [Leg; LEGS_PER_MOVE] {
        build_legs(mv, disk, self.geometry, destination_height, self.speed)
    }
}

/// Build the lift, traverse and descend legs that carry `disk` along `mv`.
///
/// Durations are distance over `speed`. When the disk already sits above the
/// destination the traverse leg has zero length and zero duration but is
/// still returned.
pub fn build_legs<H: Copy>(
    mv: Move,
    disk: &Disk<H>,
    geometry: &Geometry,
    destination_height: usize,
    speed: PixelsPerSec,
) -> [Leg; LEGS_PER_MOVE] {
    let start = disk.position();
    let lift_y = geometry.lift_y();
    let dest_x = geometry.disk_x(mv.to, disk.width().0);

    let above_source = Point::new(start.x, lift_y);
    let above_dest = Point::new(dest_x, lift_y);
    let resting = Point::new(dest_x, geometry.rest_y(destination_height));

    [
        leg(LegKind::Lift, start, above_source, speed),
        leg(LegKind::Traverse, above_source, above_dest, speed),
        leg(LegKind::Descend, above_dest, resting, speed),
    ]
}

fn leg(kind: LegKind, start: Point, end: Point, speed: PixelsPerSec) -> Leg {
    Leg {
        kind,
        start,
        end,
        duration: speed.travel_time(start.distance(end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Pixels, Seconds};
    use crate::solver::PegId;
    use crate::tower::DiskId;

    fn top_disk() -> Disk<()> {
        // Smallest of three default disks, resting third from the bottom
        Disk::new(DiskId(2), Pixels(130.0), Point::new(85.0, 175.0), ())
    }

    fn close(a: Seconds, b: f32) -> bool {
        (a.0 - b).abs() < 1e-5
    }

    #[test]
    fn test_first_move_of_three() {
        let geometry = Geometry::default();
        let speed = PixelsPerSec(450.0);
        let legs = build_legs(
            Move::new(PegId::Left, PegId::Right),
            &top_disk(),
            &geometry,
            1,
            speed,
        );

        assert_eq!(legs[0].kind, LegKind::Lift);
        assert_eq!(legs[0].start, Point::new(85.0, 175.0));
        assert_eq!(legs[0].end, Point::new(85.0, 10.0));
        assert!(close(legs[0].duration, 165.0 / 450.0));

        assert_eq!(legs[1].end, Point::new(485.0, 10.0));
        assert!(close(legs[1].duration, 400.0 / 450.0));

        assert_eq!(legs[2].end, Point::new(485.0, 215.0));
        assert!(close(legs[2].duration, 205.0 / 450.0));
    }

    #[test]
    fn test_legs_are_continuous() {
        let geometry = Geometry::default();
        let legs = build_legs(
            Move::new(PegId::Left, PegId::Middle),
            &top_disk(),
            &geometry,
            2,
            PixelsPerSec(300.0),
        );

        assert_eq!(legs[0].end, legs[1].start);
        assert_eq!(legs[1].end, legs[2].start);
    }

    #[test]
    fn test_coincident_pegs_keep_traverse() {
        let mut geometry = Geometry::default();
        geometry.peg_centers[2] = geometry.peg_centers[0];
        let legs = build_legs(
            Move::new(PegId::Left, PegId::Right),
            &top_disk(),
            &geometry,
            1,
            PixelsPerSec(450.0),
        );

        assert_eq!(legs.len(), LEGS_PER_MOVE);
        assert_eq!(legs[1].kind, LegKind::Traverse);
        assert_eq!(legs[1].duration, Seconds::ZERO);
    }

    #[test]
    fn test_speed_scales_duration() {
        let geometry = Geometry::default();
        let mv = Move::new(PegId::Left, PegId::Right);
        let slow = build_legs(mv, &top_disk(), &geometry, 1, PixelsPerSec(450.0));
        let fast = build_legs(mv, &top_disk(), &geometry, 1, PixelsPerSec(900.0));

        for (s, f) in slow.iter().zip(fast.iter()) {
            assert!(close(f.duration, s.duration.0 / 2.0));
        }
    }
}
