//! Downhill bracket search with parabolic extrapolation.

use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::SolverError;

use super::{BracketConfig, DoubleBracket};

/// Finds three points `x0 < x1 < x2` with `f(x0) > f(x1) <= f(x2)`.
///
/// Starting from two points, the search steps downhill by growing golden
/// steps. Each step first tries the vertex of the parabola through the last
/// three points, limited to `max_magnification` times the current step.
///
/// The objective is evaluated afresh at every point; it is left to the
/// objective to cache values if that matters.
///
/// # Example
///
/// ```
/// use linesearch_core::traits::FnScalar;
/// use linesearch_optimiser::bracket::BracketFinder;
///
/// let f = FnScalar::new(f64::cosh, f64::sinh);
/// let b = BracketFinder::with_defaults().nr(&f, 4.0, 5.0).unwrap();
/// assert!(b.x0() < 0.0 && 0.0 < b.x2());
/// assert!(f64::cosh(b.x1()) < f64::cosh(b.x0()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BracketFinder {
    config: BracketConfig,
}

impl BracketFinder {
    /// Create a finder with the given configuration.
    pub fn new(config: BracketConfig) -> Self {
        Self { config }
    }

    /// Create a finder with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: BracketConfig::default(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &BracketConfig {
        &self.config
    }

    /// Bracket a minimum of `f`, starting from `xmin` and `xmax`.
    ///
    /// See Press, Teukolsky, Vetterling, Flannery, *Numerical Recipes*,
    /// 3rd edition, section 10.1.
    ///
    /// # Returns
    ///
    /// * `Ok(bracket)` - the last three points, sorted
    /// * `Err(SolverError::InvalidInterval)` - `xmin >= xmax` or an endpoint
    ///   is not finite
    /// * `Err(SolverError::NonFinite)` - a search point or its value left the
    ///   finite reals
    /// * `Err(SolverError::MaxIterationsExceeded)` - still descending after
    ///   `max_iterations` steps
    pub fn nr<F>(&self, f: &F, xmin: f64, xmax: f64) -> Result<DoubleBracket, SolverError>
    where
        F: ScalarFunction + ?Sized,
    {
        if !(xmin.is_finite() && xmax.is_finite() && xmin < xmax) {
            return Err(SolverError::InvalidInterval {
                lower: xmin,
                upper: xmax,
            });
        }
        let gold = self.config.golden_ratio;
        let glimit = self.config.max_magnification;
        let tiny = self.config.tiny;
        let eval = |x: f64| {
            let y = f.value(x);
            if x.is_finite() && y.is_finite() {
                Ok(y)
            } else {
                Err(SolverError::NonFinite { x })
            }
        };

        // Downhill runs from x0 to x1, in either direction.
        let (mut x0, mut y0) = (xmin, eval(xmin)?);
        let (mut x1, mut y1) = (xmax, eval(xmax)?);
        if y1 > y0 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }
        let mut x2 = gold.mul_add(x1 - x0, x1);
        let mut y2 = eval(x2)?;

        let mut iterations = 0;
        while y1 > y2 {
            if iterations == self.config.max_iterations {
                tracing::debug!(iterations, x0, x1, x2, "no bracket within iteration limit");
                return Err(SolverError::MaxIterationsExceeded { iterations });
            }
            iterations += 1;
            tracing::debug!(iteration = iterations, x0, x1, x2, y1, y2, "bracket expansion step");

            // Vertex of the parabola through the last three points.
            let r = (x1 - x0) * (y1 - y2);
            let q = (x1 - x2) * (y1 - y0);
            let qr = q - r;
            let denom = 2.0 * qr.abs().max(tiny).copysign(qr);
            let u = x1 - ((x1 - x2) * q - (x1 - x0) * r) / denom;
            let ulim = glimit.mul_add(x2 - x1, x1);

            // A NaN vertex fails every comparison and takes the golden step.
            let (u, fu) = if (x1 - u) * (u - x2) > 0.0 {
                let fu = eval(u)?;
                if fu < y2 {
                    // Minimum between x1 and x2
                    return found(x1, u, x2, iterations);
                }
                if fu > y1 {
                    // Minimum between x0 and u
                    return found(x0, x1, u, iterations);
                }
                let u = gold.mul_add(x2 - x1, x2);
                (u, eval(u)?)
            } else if (x2 - u) * (u - ulim) > 0.0 {
                let fu = eval(u)?;
                if fu < y2 {
                    x1 = x2;
                    y1 = y2;
                    x2 = u;
                    y2 = fu;
                    let u = gold.mul_add(x2 - x1, x2);
                    (u, eval(u)?)
                } else {
                    (u, fu)
                }
            } else if (u - ulim) * (ulim - x2) >= 0.0 {
                (ulim, eval(ulim)?)
            } else {
                let u = gold.mul_add(x2 - x1, x2);
                (u, eval(u)?)
            };

            x0 = x1;
            y0 = y1;
            x1 = x2;
            y1 = y2;
            x2 = u;
            y2 = fu;
        }
        found(x0, x1, x2, iterations)
    }
}

fn found(a: f64, b: f64, c: f64, iterations: usize) -> Result<DoubleBracket, SolverError> {
    let bracket = DoubleBracket::make(a, b, c)?;
    tracing::debug!(%bracket, iterations, "bracket found");
    Ok(bracket)
}
