//! Shared geometry of goal gates and wall runs

use crate::spatial::direction::{Coordinate, Direction};

/// A straight run of cells facing one direction
///
/// Runs facing Left or Right lie along y; runs facing Up or Down lie along x.
/// Offsets are measured along that span axis only.
pub trait Segment {
    /// Side the run faces
    fn direction(&self) -> Direction;

    /// Member cells, ascending along the span axis
    fn members(&self) -> &[Coordinate];

    /// Member count
    fn length(&self) -> usize {
        self.members().len()
    }

    /// Test membership
    fn contains(&self, coordinate: Coordinate) -> bool {
        self.members().contains(&coordinate)
    }

    /// Mean of the member coordinates
    fn center(&self) -> [f64; 2] {
        let members = self.members();
        if members.is_empty() {
            return [0.0, 0.0];
        }
        let count = members.len() as f64;
        let (sum_x, sum_y) = members.iter().fold((0.0, 0.0), |(x, y), c| {
            (x + f64::from(c.x), y + f64::from(c.y))
        });
        [sum_x / count, sum_y / count]
    }

    /// Signed distance from the center to `probe` along the span axis
    fn offset_from_center(&self, probe: Coordinate) -> f64 {
        let center = self.center();
        if self.direction().is_horizontal() {
            f64::from(probe.y) - center[1]
        } else {
            f64::from(probe.x) - center[0]
        }
    }
}
