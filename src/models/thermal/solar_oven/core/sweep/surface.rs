use uom::si::{f64::Length, length::meter};

use crate::models::thermal::solar_oven::core::{Configuration, Metric};

#[cfg(test)]
use crate::models::thermal::solar_oven::core::test_support::SurfaceTracker;

/// One evaluated cell of a performance surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub h: Length,
    pub insulator_thickness: Length,

    /// Value of the surface's metric at this cell.
    pub z: f64,
}

impl GridPoint {
    /// Flattens the point into `(h, insulator_thickness, z)`, lengths in metres.
    #[must_use]
    pub fn triple(&self) -> (f64, f64, f64) {
        (
            self.h.get::<meter>(),
            self.insulator_thickness.get::<meter>(),
            self.z,
        )
    }
}

/// A complete performance surface and the inputs that produced it.
///
/// Points are in canonical order: ascending `h` as the primary key and
/// ascending insulator thickness as the secondary key.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    config: Configuration,
    metric: Metric,
    rows: usize,
    columns: usize,
    points: Vec<GridPoint>,
    #[cfg(test)]
    tracker: SurfaceTracker,
}

impl ResultSet {
    /// Most cells a single surface may hold.
    pub const MAX_POINTS: usize = 4_000_000;

    /// Assembles a surface from a fully populated buffer.
    ///
    /// The caller must ensure `points.len() == rows * columns` and that the
    /// points are in canonical order.
    pub(super) fn new_unchecked(
        config: Configuration,
        metric: Metric,
        rows: usize,
        columns: usize,
        points: Vec<GridPoint>,
    ) -> Self {
        debug_assert_eq!(points.len(), rows * columns);
        Self {
            config,
            metric,
            rows,
            columns,
            points,
            #[cfg(test)]
            tracker: SurfaceTracker::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Grid dimensions as `(h steps, insulator thickness steps)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at row `i` (absorber height) and column `j`
    /// (insulator thickness).
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<&GridPoint> {
        if i < self.rows && j < self.columns {
            self.points.get(i * self.columns + j)
        } else {
            None
        }
    }

    /// The surface as plain `(h, insulator_thickness, z)` tuples.
    pub fn triples(&self) -> impl ExactSizeIterator<Item = (f64, f64, f64)> + '_ {
        self.points.iter().map(GridPoint::triple)
    }
}
