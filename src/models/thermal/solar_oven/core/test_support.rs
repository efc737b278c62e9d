use std::{
    cell::Cell,
    collections::HashSet,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread::{self, ThreadId},
};

use uom::si::f64::Length;

use crate::support::constraint::StrictlyPositive;

use super::{
    Configuration, EvaluationError, Metric, OvenPhysics, PhysicalModel, RawConfiguration,
    materials::{
        Absorber, BodyMaterial, Insulator, ReflectiveMaterial, ReflectorType, WindowMaterial,
    },
};

/// The baseline oven: black construction paper absorber, single Mylar
/// window, cardboard body, fiberglass insulation, three rectangular foil
/// reflectors.
pub(super) fn reference() -> Configuration {
    Configuration {
        absorber: Absorber::BCS,
        window: WindowMaterial::SingleMylar,
        inner_body: BodyMaterial::C,
        outer_body: BodyMaterial::C,
        insulator: Insulator::FG,
        reflector_type: ReflectorType::Rectangular,
        reflective_material: ReflectiveMaterial::AF,
        reflector_number: StrictlyPositive::new(3).unwrap(),
    }
}

pub(super) fn raw_reference() -> RawConfiguration {
    RawConfiguration {
        absorber: "BCS".to_owned(),
        window: "SingleMylar".to_owned(),
        inner_body: "C".to_owned(),
        outer_body: "C".to_owned(),
        insulator: "FG".to_owned(),
        reflector_type: "Rectangular".to_owned(),
        reflective_material: "AF".to_owned(),
        reflector_number: 3,
    }
}

/// Default physics that counts every evaluation.
#[derive(Debug, Default)]
pub(super) struct CountingModel {
    inner: OvenPhysics,
    calls: AtomicUsize,
}

impl CountingModel {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PhysicalModel for CountingModel {
    fn evaluate(
        &self,
        config: &Configuration,
        h: Length,
        insulator_thickness: Length,
        metric: Metric,
    ) -> Result<f64, EvaluationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.evaluate(config, h, insulator_thickness, metric)
    }
}

/// Default physics that rejects every absorber height above a threshold
/// while armed.
#[derive(Debug)]
pub(super) struct FailingModel {
    inner: OvenPhysics,
    fail_above: Length,
    armed: AtomicBool,
}

impl FailingModel {
    pub(super) fn new(fail_above: Length, armed: bool) -> Self {
        Self {
            inner: OvenPhysics::default(),
            fail_above,
            armed: AtomicBool::new(armed),
        }
    }

    pub(super) fn arm(&self, armed: bool) {
        self.armed.store(armed, Ordering::SeqCst);
    }
}

impl PhysicalModel for FailingModel {
    fn evaluate(
        &self,
        config: &Configuration,
        h: Length,
        insulator_thickness: Length,
        metric: Metric,
    ) -> Result<f64, EvaluationError> {
        if self.armed.load(Ordering::SeqCst) && h > self.fail_above {
            return Err(EvaluationError::OutOfDomain {
                context: format!("absorber height {h:?} above test limit"),
            });
        }
        self.inner.evaluate(config, h, insulator_thickness, metric)
    }
}

/// Default physics that records which threads evaluate it.
#[derive(Debug, Default)]
pub(super) struct ThreadRecordingModel {
    inner: OvenPhysics,
    threads: Mutex<HashSet<ThreadId>>,
}

impl ThreadRecordingModel {
    /// Number of distinct threads that have evaluated the model.
    pub(super) fn distinct_threads(&self) -> usize {
        self.threads.lock().map_or(0, |threads| threads.len())
    }
}

impl PhysicalModel for ThreadRecordingModel {
    fn evaluate(
        &self,
        config: &Configuration,
        h: Length,
        insulator_thickness: Length,
        metric: Metric,
    ) -> Result<f64, EvaluationError> {
        if let Ok(mut threads) = self.threads.lock() {
            threads.insert(thread::current().id());
        }
        self.inner.evaluate(config, h, insulator_thickness, metric)
    }
}

thread_local! {
    static LIVE_SURFACES: Cell<usize> = const { Cell::new(0) };
}

/// Counts the surfaces alive on the current thread.
///
/// Every `ResultSet` carries one in test builds. Tracking is per thread, so
/// tests running in parallel do not see each other's surfaces.
#[derive(Debug)]
pub(super) struct SurfaceTracker(());

impl SurfaceTracker {
    pub(super) fn new() -> Self {
        LIVE_SURFACES.with(|live| live.set(live.get() + 1));
        Self(())
    }
}

impl Clone for SurfaceTracker {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl Drop for SurfaceTracker {
    fn drop(&mut self) {
        LIVE_SURFACES.with(|live| live.set(live.get().saturating_sub(1)));
    }
}

impl PartialEq for SurfaceTracker {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

/// Surfaces currently alive on this thread.
pub(super) fn live_surfaces() -> usize {
    LIVE_SURFACES.with(Cell::get)
}
