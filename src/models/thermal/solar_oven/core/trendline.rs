//! Logarithmic trendlines, `y = c·ln(x) + i`.

use linreg::linear_regression;

/// A logarithmic trendline `y = coefficient·ln(x) + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LnTrendline {
    pub coefficient: f64,
    pub intercept: f64,
}

impl LnTrendline {
    #[must_use]
    pub const fn new(coefficient: f64, intercept: f64) -> Self {
        Self {
            coefficient,
            intercept,
        }
    }

    /// Least-squares fit of `y` against `ln(x)`.
    ///
    /// Returns `None` for fewer than two points, for points whose `ln(x)`
    /// values are all equal, or when the fit is not finite.
    pub fn fit(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let (ln_x, y): (Vec<f64>, Vec<f64>) =
            points.into_iter().map(|(x, y)| (x.ln(), y)).unzip();
        if ln_x.len() < 2 {
            return None;
        }

        let (coefficient, intercept) = linear_regression::<f64, f64, f64>(&ln_x, &y).ok()?;
        let line = Self::new(coefficient, intercept);
        (line.coefficient.is_finite() && line.intercept.is_finite()).then_some(line)
    }

    /// Evaluates the trendline at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.coefficient * x.ln() + self.intercept
    }

    /// Returns the `y` value where this trendline crosses `other`.
    ///
    /// Returns `None` when the lines are parallel or the crossing is not finite.
    #[must_use]
    pub fn crossing(&self, other: &LnTrendline) -> Option<f64> {
        let slope = self.coefficient - other.coefficient;
        if slope == 0.0 {
            return None;
        }

        let ln_x = (other.intercept - self.intercept) / slope;
        let y = self.coefficient * ln_x + self.intercept;
        y.is_finite().then_some(y)
    }
}
