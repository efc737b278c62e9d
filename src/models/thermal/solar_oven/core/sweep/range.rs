use thiserror::Error;
use uom::si::{f64::Length, length::meter};

/// Relative slack when deciding whether a step size divides a span evenly.
const STEP_FIT_TOLERANCE: f64 = 1e-9;

/// A closed interval sampled at evenly spaced points along one sweep axis.
///
/// The first point is always `start`. When built from a step count the last
/// point is exactly `end`; when built from a step size the last point is the
/// final whole step that fits inside the interval (snapped to `end` if it
/// lands there within floating-point slack).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    start: Length,
    last: Length,
    steps: usize,
}

/// Errors raised for a malformed sweep axis.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// A bound or step size is `NaN` or infinite.
    #[error("range bounds and step size must be finite")]
    NotFinite,

    /// The interval is empty or inverted.
    #[error("range span must be positive: start={start:?}, end={end:?}")]
    NonPositiveSpan { start: Length, end: Length },

    /// The range was asked for zero points.
    #[error("range needs at least one step")]
    NonPositiveSteps,

    /// The step size is zero or negative.
    #[error("step size must be positive: step={step:?}")]
    NonPositiveStepSize { step: Length },

    /// The range would sample more points than [`AxisRange::MAX_STEPS`].
    #[error("range samples {steps} points, more than the limit of {limit}")]
    TooManySteps { steps: f64, limit: usize },
}

impl AxisRange {
    /// Most sample points a single axis may have.
    pub const MAX_STEPS: usize = 100_000;

    /// Samples `[start, end]` at `steps` evenly spaced points.
    ///
    /// A single step samples only `start`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if a bound is not finite, `end <= start`, or
    /// `steps` is zero or above [`MAX_STEPS`](Self::MAX_STEPS).
    pub fn with_steps(start: Length, end: Length, steps: usize) -> Result<Self, RangeError> {
        check_span(start, end)?;
        if steps == 0 {
            return Err(RangeError::NonPositiveSteps);
        }
        if steps > Self::MAX_STEPS {
            #[allow(clippy::cast_precision_loss)]
            let steps = steps as f64;
            return Err(RangeError::TooManySteps {
                steps,
                limit: Self::MAX_STEPS,
            });
        }

        let last = if steps == 1 { start } else { end };
        Ok(Self { start, last, steps })
    }

    /// Samples `[start, end]` every `step`, starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if a bound or the step is not finite,
    /// `end <= start`, `step` is not positive, or the step is so small that
    /// the axis would exceed [`MAX_STEPS`](Self::MAX_STEPS) points.
    pub fn with_step_size(start: Length, end: Length, step: Length) -> Result<Self, RangeError> {
        check_span(start, end)?;
        if !step.is_finite() {
            return Err(RangeError::NotFinite);
        }
        if step <= Length::new::<meter>(0.0) {
            return Err(RangeError::NonPositiveStepSize { step });
        }

        let span = (end - start).get::<meter>();
        let intervals = (span / step.get::<meter>() + STEP_FIT_TOLERANCE).floor();

        // Checked in f64 before the cast, which saturates.
        #[allow(clippy::cast_precision_loss)]
        let max_intervals = (Self::MAX_STEPS - 1) as f64;
        if intervals > max_intervals {
            return Err(RangeError::TooManySteps {
                steps: intervals + 1.0,
                limit: Self::MAX_STEPS,
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = intervals as usize + 1;

        let reach = start + step * intervals;
        let last = if (end - reach).abs().get::<meter>() <= STEP_FIT_TOLERANCE * span {
            end
        } else {
            reach
        };

        Ok(Self { start, last, steps })
    }

    /// Builds a range from known-good values without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure `start < end`, both finite, and `steps >= 2`.
    #[must_use]
    pub(in crate::models::thermal::solar_oven) fn new_unchecked(
        start: Length,
        end: Length,
        steps: usize,
    ) -> Self {
        Self {
            start,
            last: end,
            steps,
        }
    }

    /// Number of sample points along the axis.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub fn start(&self) -> Length {
        self.start
    }

    /// The final sample point.
    #[must_use]
    pub fn last(&self) -> Length {
        self.last
    }

    /// Returns the `index`-th sample point, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Length> {
        match index {
            i if i >= self.steps => None,
            0 => Some(self.start),
            i if i + 1 == self.steps => Some(self.last),
            i => {
                #[allow(clippy::cast_precision_loss)]
                let fraction = i as f64 / (self.steps - 1) as f64;
                Some(self.start + (self.last - self.start) * fraction)
            }
        }
    }

    /// Iterates the sample points in ascending order.
    pub fn values(&self) -> impl Iterator<Item = Length> + '_ {
        (0..self.steps).filter_map(|i| self.get(i))
    }
}

fn check_span(start: Length, end: Length) -> Result<(), RangeError> {
    if !(start.is_finite() && end.is_finite()) {
        return Err(RangeError::NotFinite);
    }
    if end <= start {
        return Err(RangeError::NonPositiveSpan { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::centimeter;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn step_count_hits_both_ends() {
        let range = AxisRange::with_steps(m(0.05), m(0.4), 36).unwrap();
        assert_eq!(range.steps(), 36);
        assert_eq!(range.get(0), Some(m(0.05)));
        assert_eq!(range.get(35), Some(m(0.4)));
        assert_eq!(range.get(36), None);
        assert_relative_eq!(range.get(1).unwrap().get::<meter>(), 0.06, epsilon = 1e-12);
    }

    #[test]
    fn step_size_that_divides_the_span() {
        let range = AxisRange::with_step_size(m(0.0), m(0.1), m(0.05)).unwrap();
        let values: Vec<_> = range.values().collect();
        assert_eq!(values, vec![m(0.0), m(0.05), m(0.1)]);

        let range = AxisRange::with_step_size(m(0.0), m(1.5), Length::new::<centimeter>(1.0));
        assert_eq!(range.unwrap().steps(), 151);
    }

    #[test]
    fn step_size_that_overshoots_stops_inside() {
        let range = AxisRange::with_step_size(m(0.0), m(1.0), m(0.3)).unwrap();
        assert_eq!(range.steps(), 4);
        assert_relative_eq!(range.last().get::<meter>(), 0.9, epsilon = 1e-12);

        let coarse = AxisRange::with_step_size(m(0.0), m(1.0), m(2.0)).unwrap();
        assert_eq!(coarse.values().collect::<Vec<_>>(), vec![m(0.0)]);
    }

    #[test]
    fn values_ascend_strictly() {
        let range = AxisRange::with_steps(m(-0.3), m(0.7), 11).unwrap();
        let values: Vec<_> = range.values().collect();
        assert_eq!(values.len(), 11);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert_eq!(
            AxisRange::with_step_size(m(1.0), m(0.0), m(0.5)),
            Err(RangeError::NonPositiveSpan {
                start: m(1.0),
                end: m(0.0)
            })
        );
        assert!(matches!(
            AxisRange::with_steps(m(0.2), m(0.2), 3),
            Err(RangeError::NonPositiveSpan { .. })
        ));
        assert_eq!(
            AxisRange::with_steps(m(0.0), m(1.0), 0),
            Err(RangeError::NonPositiveSteps)
        );
        assert_eq!(
            AxisRange::with_step_size(m(0.0), m(1.0), m(-0.1)),
            Err(RangeError::NonPositiveStepSize { step: m(-0.1) })
        );
        assert_eq!(
            AxisRange::with_step_size(m(0.0), m(f64::NAN), m(0.1)),
            Err(RangeError::NotFinite)
        );
    }

    #[test]
    fn tiny_step_size_is_rejected_not_overflowed() {
        let err = AxisRange::with_step_size(m(0.0), m(1.0), m(1e-300)).unwrap_err();
        let RangeError::TooManySteps { steps, limit } = err else {
            panic!("expected too many steps, got {err:?}");
        };
        assert!(steps > 1e299);
        assert_eq!(limit, AxisRange::MAX_STEPS);

        // Subnormal step: the quotient is infinite.
        assert!(matches!(
            AxisRange::with_step_size(m(0.0), m(1.0), m(f64::MIN_POSITIVE / 4.0)),
            Err(RangeError::TooManySteps { .. })
        ));
    }

    #[test]
    fn step_limit_is_inclusive() {
        let max = AxisRange::MAX_STEPS;

        let range = AxisRange::with_steps(m(0.0), m(1.0), max).unwrap();
        assert_eq!(range.steps(), max);
        assert!(matches!(
            AxisRange::with_steps(m(0.0), m(1.0), max + 1),
            Err(RangeError::TooManySteps { .. })
        ));
        assert!(matches!(
            AxisRange::with_steps(m(0.0), m(1.0), usize::MAX),
            Err(RangeError::TooManySteps { .. })
        ));

        #[allow(clippy::cast_precision_loss)]
        let step = m(1.0 / (max - 1) as f64);
        assert_eq!(AxisRange::with_step_size(m(0.0), m(1.0), step).unwrap().steps(), max);
    }
}
