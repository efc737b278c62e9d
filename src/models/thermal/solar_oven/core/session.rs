//! A session owning at most one live performance surface.

mod config;
mod error;

pub use config::SessionConfig;
pub use error::SessionError;

use rayon::ThreadPool;
use tracing::debug;

use super::{
    Configuration, Metric, OvenPhysics, PhysicalModel, RawConfiguration,
    sweep::{ResultSet, SweepError, generate_surface_on, worker_pool},
};

/// Counters describing a session's surface lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Requests received, successful or not.
    pub requests: usize,

    /// Requests that failed validation or sweeping.
    pub failures: usize,

    /// Surfaces installed as current.
    pub installs: usize,

    /// Surfaces dropped after being superseded or cleared.
    pub releases: usize,
}

impl SessionStats {
    /// Number of surfaces the session currently holds (zero or one).
    #[must_use]
    pub fn live(&self) -> usize {
        self.installs - self.releases
    }
}

/// Generates performance surfaces on request and keeps the latest one.
///
/// A new surface is built completely before the previous one is released,
/// so a failed request never leaves the session without its last good
/// surface. Requests take `&mut self`: a surface returned by one request
/// cannot be held across the next.
///
/// A session configured for more than one thread builds its worker pool
/// once and sweeps every request on it.
///
/// # Example
///
/// ```
/// use solar_oven_models::models::thermal::solar_oven::{
///     Metric, RawConfiguration, SurfaceSession,
/// };
///
/// let raw = RawConfiguration {
///     absorber: "TSC".into(),
///     window: "DoubleMylar".into(),
///     inner_body: "W16".into(),
///     outer_body: "C".into(),
///     insulator: "SF".into(),
///     reflector_type: "Trapezoidal".into(),
///     reflective_material: "MS".into(),
///     reflector_number: 4,
/// };
///
/// let mut session: SurfaceSession = SurfaceSession::default();
/// let surface = session.request_raw(&raw, Metric::Cost)?;
/// assert_eq!(surface.shape(), (36, 151));
/// assert_eq!(session.stats().live(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SurfaceSession<M = OvenPhysics> {
    model: M,
    config: SessionConfig,
    current: Option<ResultSet>,
    stats: SessionStats,
    pool: Option<ThreadPool>,
}

impl<M: Default> Default for SurfaceSession<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<M> SurfaceSession<M> {
    /// Creates an empty session sweeping the default grid.
    pub fn new(model: M) -> Self {
        Self::with_config(model, SessionConfig::default())
    }

    pub fn with_config(model: M, config: SessionConfig) -> Self {
        let pool = worker_pool(config.sweep.threads);
        Self {
            model,
            config,
            current: None,
            stats: SessionStats::default(),
            pool,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The most recently installed surface, if any.
    pub fn current(&self) -> Option<&ResultSet> {
        self.current.as_ref()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Releases the current surface, if any.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            self.stats.releases += 1;
            debug!("surface released");
        }
    }

    fn install(&mut self, surface: ResultSet) -> &ResultSet {
        self.clear();
        self.stats.installs += 1;
        debug!(points = surface.len(), metric = %surface.metric(), "surface installed");
        self.current.insert(surface)
    }
}

impl<M: PhysicalModel + Sync> SurfaceSession<M> {
    /// Sweeps `metric` for `config` and installs the result as current.
    ///
    /// # Errors
    ///
    /// Returns a [`SweepError`] if the sweep fails; the current surface is
    /// kept.
    pub fn request(
        &mut self,
        config: &Configuration,
        metric: Metric,
    ) -> Result<&ResultSet, SweepError> {
        self.stats.requests += 1;

        let surface = generate_surface_on(
            self.pool.as_ref(),
            &self.model,
            config,
            metric,
            self.config.h_range,
            self.config.insulator_range,
        );

        match surface {
            Ok(surface) => Ok(self.install(surface)),
            Err(error) => {
                self.stats.failures += 1;
                Err(error)
            }
        }
    }

    /// Validates `raw`, then behaves like [`request`](Self::request).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] without running the model if
    /// `raw` is invalid, or [`SessionError::Sweep`] if the sweep fails.
    pub fn request_raw(
        &mut self,
        raw: &RawConfiguration,
        metric: Metric,
    ) -> Result<&ResultSet, SessionError> {
        match Configuration::validate(raw) {
            Ok(config) => Ok(self.request(&config, metric)?),
            Err(error) => {
                self.stats.requests += 1;
                self.stats.failures += 1;
                debug!(%error, "request rejected");
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    use crate::models::thermal::solar_oven::core::{
        ValidationError,
        sweep::{AxisRange, SweepConfig},
        test_support::{
            CountingModel, FailingModel, ThreadRecordingModel, live_surfaces, raw_reference,
            reference,
        },
    };

    fn small_grid() -> SessionConfig {
        let m = |value: f64| Length::new::<meter>(value);
        SessionConfig {
            h_range: AxisRange::with_steps(m(0.05), m(0.4), 4).unwrap(),
            insulator_range: AxisRange::with_steps(m(0.0), m(0.5), 3).unwrap(),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn starts_empty() {
        let session = SurfaceSession::<OvenPhysics>::default();
        assert!(session.current().is_none());
        assert_eq!(session.stats(), SessionStats::default());
    }

    #[test]
    fn keeps_one_live_surface() {
        let mut session = SurfaceSession::with_config(CountingModel::default(), small_grid());

        session.request(&reference(), Metric::Tio).unwrap();
        session.request(&reference(), Metric::Cost).unwrap();
        session.request(&reference(), Metric::Cost).unwrap();

        let stats = session.stats();
        assert_eq!(stats.requests, 3);
        assert_eq!(stats.installs, 3);
        assert_eq!(stats.releases, 2);
        assert_eq!(stats.live(), 1);
        assert_eq!(session.model().calls(), 3 * 12);
        assert_eq!(session.current().map(ResultSet::metric), Some(Metric::Cost));

        session.clear();
        assert!(session.current().is_none());
        assert_eq!(session.stats().live(), 0);
    }

    #[test]
    fn superseded_surfaces_are_dropped() {
        let model = FailingModel::new(Length::new::<meter>(0.2), false);
        let mut session = SurfaceSession::with_config(model, small_grid());
        assert_eq!(live_surfaces(), 0);

        session.request(&reference(), Metric::Tio).unwrap();
        session.request(&reference(), Metric::Cost).unwrap();
        session.request(&reference(), Metric::Score).unwrap();
        assert_eq!(live_surfaces(), 1);

        session.model().arm(true);
        session.request(&reference(), Metric::Tio).unwrap_err();
        assert_eq!(live_surfaces(), 1);
        assert_eq!(session.current().map(ResultSet::metric), Some(Metric::Score));

        session.clear();
        assert_eq!(live_surfaces(), 0);

        session.model().arm(false);
        session.request(&reference(), Metric::Tio).unwrap();
        assert_eq!(live_surfaces(), 1);
        drop(session);
        assert_eq!(live_surfaces(), 0);
    }

    #[test]
    fn repeated_requests_are_identical() {
        let mut session = SurfaceSession::with_config(OvenPhysics::default(), small_grid());

        let first = session.request(&reference(), Metric::Score).unwrap().clone();
        let second = session.request(&reference(), Metric::Score).unwrap();
        assert_eq!(&first, second);
    }

    #[test]
    fn invalid_configuration_runs_no_simulation() {
        let mut session = SurfaceSession::with_config(CountingModel::default(), small_grid());
        let raw = RawConfiguration {
            absorber: "Copper".to_owned(),
            ..raw_reference()
        };

        let err = session.request_raw(&raw, Metric::Tio).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::UnknownVariant(_))
        ));
        assert_eq!(session.model().calls(), 0);
        assert!(session.current().is_none());
        assert_eq!(session.stats().failures, 1);
    }

    #[test]
    fn failed_refresh_keeps_previous_surface() {
        let model = FailingModel::new(Length::new::<meter>(0.2), false);
        let mut session = SurfaceSession::with_config(model, small_grid());

        let good = session.request_raw(&raw_reference(), Metric::Tio).unwrap().clone();

        session.model().arm(true);
        let err = session.request(&reference(), Metric::Cost).unwrap_err();
        assert!(matches!(err, SweepError::ModelEvaluation { .. }));

        assert_eq!(session.current(), Some(&good));
        let stats = session.stats();
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.releases, 0);
        assert_eq!(stats.live(), 1);
    }

    #[test]
    fn parallel_session_matches_serial() {
        let mut serial = SurfaceSession::with_config(OvenPhysics::default(), small_grid());
        let mut parallel = SurfaceSession::with_config(
            OvenPhysics::default(),
            SessionConfig {
                sweep: SweepConfig { threads: 3 },
                ..small_grid()
            },
        );

        let expected = serial.request(&reference(), Metric::PerformanceIndex).unwrap();
        let actual = parallel.request(&reference(), Metric::PerformanceIndex).unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn requests_share_one_worker_pool() {
        let mut session = SurfaceSession::with_config(
            ThreadRecordingModel::default(),
            SessionConfig {
                sweep: SweepConfig { threads: 3 },
                ..small_grid()
            },
        );

        for _ in 0..5 {
            session.request(&reference(), Metric::Tio).unwrap();
        }

        let threads = session.model().distinct_threads();
        assert!((1..=3).contains(&threads), "{threads} evaluating threads");
        assert_eq!(session.stats().installs, 5);
    }
}
