//! Performance surfaces over absorber height and insulator thickness.
//!
//! A sweep evaluates a [`PhysicalModel`] once per cell of the Cartesian grid
//! spanned by two [`AxisRange`]s and returns the whole surface at once.
//! Points are always in canonical order (ascending `h`, then ascending
//! insulator thickness), however many threads did the work.

mod config;
mod error;
mod range;
mod surface;

pub use config::SweepConfig;
pub use error::SweepError;
pub use range::{AxisRange, RangeError};
pub use surface::{GridPoint, ResultSet};

use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};
use tracing::{debug, warn};
use uom::si::f64::Length;

use super::{Configuration, Metric, PhysicalModel};

/// Evaluates `metric` over every `(h, insulator_thickness)` pair on the
/// calling thread.
///
/// # Errors
///
/// Returns [`SweepError::TooManyCells`] if the grid exceeds
/// [`ResultSet::MAX_POINTS`], or [`SweepError::ModelEvaluation`] for the
/// first cell, in canonical order, that the model fails to evaluate.
///
/// # Example
///
/// ```
/// use solar_oven_models::models::thermal::solar_oven::{
///     AxisRange, Configuration, Metric, OvenPhysics, RawConfiguration, generate_surface,
/// };
/// use uom::si::{f64::Length, length::meter};
///
/// let config = Configuration::validate(&RawConfiguration {
///     absorber: "BCS".into(),
///     window: "SingleMylar".into(),
///     inner_body: "C".into(),
///     outer_body: "C".into(),
///     insulator: "FG".into(),
///     reflector_type: "Rectangular".into(),
///     reflective_material: "AF".into(),
///     reflector_number: 3,
/// })?;
///
/// let m = |value: f64| Length::new::<meter>(value);
/// let h = AxisRange::with_step_size(m(0.0), m(1.0), m(0.5))?;
/// let thickness = AxisRange::with_step_size(m(0.0), m(0.1), m(0.05))?;
///
/// let surface = generate_surface(&OvenPhysics::default(), &config, Metric::Tio, h, thickness)?;
/// assert_eq!(surface.len(), 9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_surface<M: PhysicalModel + ?Sized>(
    model: &M,
    config: &Configuration,
    metric: Metric,
    h_range: AxisRange,
    insulator_range: AxisRange,
) -> Result<ResultSet, SweepError> {
    let grid = Grid::new(h_range, insulator_range)?;
    let started = Instant::now();
    debug!(rows = grid.rows(), columns = grid.columns(), %metric, "sweep started");

    let mut buffer = grid.buffer();
    grid.fill(model, config, metric, 0, &mut buffer)
        .inspect_err(log_failure)?;

    Ok(grid.finish(config, metric, buffer, started))
}

/// Evaluates `metric` over every `(h, insulator_thickness)` pair, spreading
/// rows of the grid across `sweep.threads` workers.
///
/// The result is identical to [`generate_surface`] for any thread count.
///
/// # Errors
///
/// Fails as [`generate_surface`] does.
pub fn generate_surface_with<M: PhysicalModel + Sync + ?Sized>(
    model: &M,
    config: &Configuration,
    metric: Metric,
    h_range: AxisRange,
    insulator_range: AxisRange,
    sweep: &SweepConfig,
) -> Result<ResultSet, SweepError> {
    let pool = worker_pool(sweep.threads);
    generate_surface_on(pool.as_ref(), model, config, metric, h_range, insulator_range)
}

/// Builds a pool of `threads` workers, or `None` when a sweep with that
/// many threads should run serially.
pub(super) fn worker_pool(threads: usize) -> Option<ThreadPool> {
    if threads < 2 {
        return None;
    }

    match ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => Some(pool),
        Err(error) => {
            warn!(%error, threads, "worker pool unavailable, sweeping serially");
            None
        }
    }
}

/// Sweeps on `pool` if there is one, otherwise on the calling thread.
pub(super) fn generate_surface_on<M: PhysicalModel + Sync + ?Sized>(
    pool: Option<&ThreadPool>,
    model: &M,
    config: &Configuration,
    metric: Metric,
    h_range: AxisRange,
    insulator_range: AxisRange,
) -> Result<ResultSet, SweepError> {
    let Some(pool) = pool else {
        return generate_surface(model, config, metric, h_range, insulator_range);
    };

    let grid = Grid::new(h_range, insulator_range)?;
    let started = Instant::now();
    debug!(
        rows = grid.rows(),
        columns = grid.columns(),
        %metric,
        threads = pool.current_num_threads(),
        "sweep started"
    );

    let mut buffer = grid.buffer();
    let columns = grid.columns();
    let outcomes: Vec<Result<(), SweepError>> = pool.install(|| {
        buffer
            .par_chunks_mut(columns)
            .enumerate()
            .map(|(row, cells)| grid.fill(model, config, metric, row * columns, cells))
            .collect()
    });

    // Rows come back in grid order, so the first error is the lowest cell.
    outcomes
        .into_iter()
        .collect::<Result<(), _>>()
        .inspect_err(log_failure)?;

    Ok(grid.finish(config, metric, buffer, started))
}

/// Sample points of both axes, resolved once per sweep.
struct Grid {
    h: Vec<Length>,
    insulator_thickness: Vec<Length>,
}

impl Grid {
    fn new(h_range: AxisRange, insulator_range: AxisRange) -> Result<Self, SweepError> {
        let (rows, columns) = (h_range.steps(), insulator_range.steps());
        let cells = rows.checked_mul(columns);
        if cells.is_none_or(|cells| cells > ResultSet::MAX_POINTS) {
            return Err(SweepError::TooManyCells {
                rows,
                columns,
                limit: ResultSet::MAX_POINTS,
            });
        }

        Ok(Self {
            h: h_range.values().collect(),
            insulator_thickness: insulator_range.values().collect(),
        })
    }

    fn rows(&self) -> usize {
        self.h.len()
    }

    fn columns(&self) -> usize {
        self.insulator_thickness.len()
    }

    /// A buffer with one slot per cell, coordinates filled in.
    fn buffer(&self) -> Vec<GridPoint> {
        self.h
            .iter()
            .flat_map(|&h| {
                self.insulator_thickness
                    .iter()
                    .map(move |&insulator_thickness| GridPoint {
                        h,
                        insulator_thickness,
                        z: f64::NAN,
                    })
            })
            .collect()
    }

    /// Evaluates the cells of `slots`, the first of which is cell `offset`.
    fn fill<M: PhysicalModel + ?Sized>(
        &self,
        model: &M,
        config: &Configuration,
        metric: Metric,
        offset: usize,
        slots: &mut [GridPoint],
    ) -> Result<(), SweepError> {
        for (index, slot) in (offset..).zip(slots.iter_mut()) {
            slot.z = model
                .evaluate(config, slot.h, slot.insulator_thickness, metric)
                .map_err(|source| SweepError::ModelEvaluation {
                    index,
                    h: slot.h,
                    insulator_thickness: slot.insulator_thickness,
                    source,
                })?;
        }
        Ok(())
    }

    fn finish(
        self,
        config: &Configuration,
        metric: Metric,
        points: Vec<GridPoint>,
        started: Instant,
    ) -> ResultSet {
        debug!(
            points = points.len(),
            %metric,
            elapsed_ms = started.elapsed().as_millis(),
            "sweep finished"
        );
        ResultSet::new_unchecked(*config, metric, self.rows(), self.columns(), points)
    }
}

fn log_failure(error: &SweepError) {
    if let SweepError::ModelEvaluation {
        index,
        h,
        insulator_thickness,
        source,
    } = error
    {
        warn!(index, ?h, ?insulator_thickness, %source, "sweep failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::length::meter;

    use crate::models::thermal::solar_oven::core::{
        EvaluationError, OvenPhysics,
        test_support::{CountingModel, FailingModel, reference},
    };

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn ranges() -> (AxisRange, AxisRange) {
        (
            AxisRange::with_step_size(m(0.0), m(1.0), m(0.5)).unwrap(),
            AxisRange::with_step_size(m(0.0), m(0.1), m(0.05)).unwrap(),
        )
    }

    #[test]
    fn end_to_end_reference_scenario() {
        let (h, t) = ranges();
        let surface =
            generate_surface(&OvenPhysics::default(), &reference(), Metric::Tio, h, t).unwrap();

        assert_eq!(surface.len(), 9);
        assert_eq!(surface.shape(), (3, 3));
        assert_eq!(surface.metric(), Metric::Tio);
        assert_eq!(surface.config(), &reference());

        let triples: Vec<_> = surface.triples().collect();
        let (h0, t0, _) = triples[0];
        let (h8, t8, _) = triples[8];
        assert_eq!((h0, t0), (0.0, 0.0));
        assert_eq!((h8, t8), (1.0, 0.1));
        assert!(triples.iter().all(|&(_, _, z)| z.is_finite() && z >= 0.0));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let sweep = || -> Result<ResultSet, SweepError> {
            let h = AxisRange::with_step_size(m(1.0), m(0.0), m(0.5))?;
            let t = AxisRange::with_step_size(m(0.0), m(0.1), m(0.05))?;
            generate_surface(&OvenPhysics::default(), &reference(), Metric::Tio, h, t)
        };

        assert!(matches!(
            sweep(),
            Err(SweepError::InvalidRange(RangeError::NonPositiveSpan { .. }))
        ));
    }

    #[test]
    fn oversized_grid_is_rejected_before_evaluation() {
        let model = CountingModel::default();
        let h = AxisRange::with_steps(m(0.05), m(0.4), AxisRange::MAX_STEPS).unwrap();
        let t = AxisRange::with_steps(m(0.0), m(1.5), 41).unwrap();

        for threads in [1, 2] {
            let err =
                generate_surface_with(&model, &reference(), Metric::Tio, h, t, &SweepConfig { threads })
                    .unwrap_err();
            assert_eq!(
                err,
                SweepError::TooManyCells {
                    rows: AxisRange::MAX_STEPS,
                    columns: 41,
                    limit: ResultSet::MAX_POINTS,
                }
            );
        }
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn grid_is_complete_and_ordered() {
        let h = AxisRange::with_steps(m(0.05), m(0.4), 8).unwrap();
        let t = AxisRange::with_steps(m(0.0), m(1.5), 5).unwrap();
        let surface =
            generate_surface(&OvenPhysics::default(), &reference(), Metric::Cost, h, t).unwrap();

        assert_eq!(surface.len(), 8 * 5);
        for (i, h_value) in h.values().enumerate() {
            for (j, t_value) in t.values().enumerate() {
                let point = surface.get(i, j).unwrap();
                assert_eq!(point.h, h_value);
                assert_eq!(point.insulator_thickness, t_value);
            }
        }

        let keys: Vec<_> = surface
            .points()
            .iter()
            .map(|p| (p.h.get::<meter>(), p.insulator_thickness.get::<meter>()))
            .collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(surface.get(8, 0).is_none());
    }

    #[test]
    fn evaluates_each_cell_exactly_once() {
        let model = CountingModel::default();
        let (h, t) = ranges();

        generate_surface(&model, &reference(), Metric::Score, h, t).unwrap();
        assert_eq!(model.calls(), 9);

        generate_surface(&model, &reference(), Metric::Score, h, t).unwrap();
        assert_eq!(model.calls(), 18);
    }

    #[test]
    fn sweeps_are_deterministic() {
        let (h, t) = ranges();
        let physics = OvenPhysics::default();

        for metric in Metric::variants() {
            let first = generate_surface(&physics, &reference(), *metric, h, t).unwrap();
            let second = generate_surface(&physics, &reference(), *metric, h, t).unwrap();
            let bits = |s: &ResultSet| s.points().iter().map(|p| p.z.to_bits()).collect::<Vec<_>>();
            assert_eq!(bits(&first), bits(&second));
        }
    }

    #[test]
    fn parallel_sweep_matches_serial() {
        let h = AxisRange::with_steps(m(0.05), m(0.4), 36).unwrap();
        let t = AxisRange::with_steps(m(0.0), m(1.5), 16).unwrap();
        let physics = OvenPhysics::default();

        let serial =
            generate_surface(&physics, &reference(), Metric::PerformanceIndex, h, t).unwrap();
        let parallel = generate_surface_with(
            &physics,
            &reference(),
            Metric::PerformanceIndex,
            h,
            t,
            &SweepConfig { threads: 4 },
        )
        .unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn single_thread_needs_no_pool() {
        assert!(worker_pool(0).is_none());
        assert!(worker_pool(1).is_none());
        assert_eq!(worker_pool(3).map(|pool| pool.current_num_threads()), Some(3));
    }

    #[test]
    fn reports_the_first_failing_cell() {
        let model = FailingModel::new(m(0.4), true);
        let (h, t) = ranges();

        for threads in [1, 3] {
            let err = generate_surface_with(
                &model,
                &reference(),
                Metric::Tio,
                h,
                t,
                &SweepConfig { threads },
            )
            .unwrap_err();

            let SweepError::ModelEvaluation {
                index,
                h,
                insulator_thickness,
                source,
            } = err
            else {
                panic!("expected a model evaluation error, got {err:?}");
            };
            assert_eq!(index, 3);
            assert_eq!(h, m(0.5));
            assert_eq!(insulator_thickness, m(0.0));
            assert!(matches!(source, EvaluationError::OutOfDomain { .. }));
        }
    }
}
