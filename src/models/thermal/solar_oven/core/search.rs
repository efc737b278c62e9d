//! Lowest-score designs and their ranking across configurations.
//!
//! For one configuration, [`best_design`] sweeps [`Metric::Score`] over the
//! search grid once per candidate reflector length and keeps the lowest
//! cell. [`rank_designs`] does this for many configurations and orders the
//! winners by score.

mod config;
mod error;

pub use config::SearchConfig;
pub use error::SearchError;

use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;
use twine_core::Model;

use super::{
    Configuration, Geometry, Metric, OvenPhysics, Performance, SolarOven,
    sweep::{GridPoint, generate_surface, worker_pool},
};

/// The lowest-scoring design found for one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestDesign {
    pub config: Configuration,

    /// Reflector length of the winning design, as a multiple of the window side.
    pub reflector_ml: f64,

    /// Grid point of the winning design, as swept.
    pub geometry: Geometry,

    /// Every output of the winning design.
    pub performance: Performance,

    /// The winning [`Metric::Score`]; lower is better.
    pub score: f64,
}

/// Finds the lowest-scoring geometry and reflector length for `config`.
///
/// Ties go to the earlier candidate: the smaller reflector length, then the
/// earlier cell in canonical grid order.
///
/// # Errors
///
/// Returns [`SearchError::NoReflectorLengths`] if `search.reflector_ml` is
/// empty, or [`SearchError::Sweep`] if any sweep fails, including for a
/// reflector length the model rejects.
pub fn best_design(
    config: &Configuration,
    physics: &OvenPhysics,
    search: &SearchConfig,
) -> Result<BestDesign, SearchError> {
    let mut best: Option<(OvenPhysics, GridPoint)> = None;

    for &reflector_ml in &search.reflector_ml {
        let candidate = OvenPhysics {
            reflector_ml,
            ..*physics
        };
        let surface = generate_surface(
            &candidate,
            config,
            Metric::Score,
            search.h_range,
            search.insulator_range,
        )
        .map_err(|source| SearchError::Sweep {
            config: *config,
            reflector_ml,
            source,
        })?;

        let lowest = surface
            .points()
            .iter()
            .copied()
            .reduce(|low, point| if point.z < low.z { point } else { low });

        match (lowest, best) {
            (Some(point), Some((_, low))) if point.z >= low.z => {}
            (Some(point), _) => best = Some((candidate, point)),
            (None, _) => {}
        }
    }

    let Some((physics, point)) = best else {
        return Err(SearchError::NoReflectorLengths);
    };

    let geometry = Geometry::new(point.h, point.insulator_thickness);
    let performance = SolarOven::new(*config, physics).call(&geometry)?;

    Ok(BestDesign {
        config: *config,
        reflector_ml: physics.reflector_ml,
        geometry,
        performance,
        score: point.z,
    })
}

/// Searches every configuration and returns the `top` best, lowest score
/// first.
///
/// Configurations with equal scores keep their input order.
///
/// # Errors
///
/// Returns the error of the first configuration, in input order, whose
/// search fails.
pub fn rank_designs(
    configs: &[Configuration],
    physics: &OvenPhysics,
    search: &SearchConfig,
    top: usize,
) -> Result<Vec<BestDesign>, SearchError> {
    let started = Instant::now();
    let search_one = |config: &Configuration| best_design(config, physics, search);

    let outcomes: Vec<Result<BestDesign, SearchError>> = match worker_pool(search.sweep.threads) {
        Some(pool) => pool.install(|| configs.par_iter().map(search_one).collect()),
        None => configs.iter().map(search_one).collect(),
    };

    let mut ranked = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked.truncate(top);

    debug!(
        candidates = configs.len(),
        kept = ranked.len(),
        best = ranked.first().map(|design| design.score),
        elapsed_ms = started.elapsed().as_millis(),
        "designs ranked"
    );
    Ok(ranked)
}
