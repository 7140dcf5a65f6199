//! Restriction of a multivariate objective to a line.
//!
//! A line search minimises `t -> g(origin + t * direction)`. [`LineFunction`]
//! is that function of one variable. Every evaluation returns the position
//! and the full gradient along with the value, so a driver that needs the
//! gradient at the accepted step reads it from the returned
//! [`LineEvaluation`] instead of from state left behind in the function.

use std::fmt;

use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;

/// Value, position and gradient at one step along a line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineEvaluation {
    /// Step length `t`.
    pub t: f64,
    /// Objective value at `point`.
    pub value: f64,
    /// Directional derivative `gradient . direction`.
    pub slope: f64,
    /// `origin + t * direction`.
    pub point: Vec<f64>,
    /// Objective gradient at `point`.
    pub gradient: Vec<f64>,
}

impl fmt::Display for LineEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "LineEvaluation t={:E} value={:E} slope={:E}",
            self.t, self.value, self.slope
        )?;
        writeln!(f, "{:<4} {:<22} {:<22}", "i", "position", "gradient")?;
        for (i, (x, g)) in self.point.iter().zip(&self.gradient).enumerate() {
            writeln!(f, "{:4} {:22.16E} {:22.16E}", i, x, g)?;
        }
        Ok(())
    }
}

/// `t -> g(origin + t * direction)` for `g: R^n -> R` with gradient.
///
/// The objective returns `(value, gradient)` at a point.
///
/// # Examples
/// ```
/// use linesearch_core::traits::ScalarFunction;
/// use linesearch_optimiser::line::LineFunction;
///
/// // g(x, y) = x^2 + 4 y^2 along (1, 1) + t (-1, 0)
/// let g = |p: &[f64]| (p[0] * p[0] + 4.0 * p[1] * p[1], vec![2.0 * p[0], 8.0 * p[1]]);
/// let line = LineFunction::new(g, vec![1.0, 1.0], vec![-1.0, 0.0]).unwrap();
///
/// assert_eq!(line.value(0.0), 5.0);
/// assert_eq!(line.slope(0.0), -2.0);
///
/// let e = line.evaluate(1.0);
/// assert_eq!(e.point, vec![0.0, 1.0]);
/// assert_eq!(e.gradient, vec![0.0, 8.0]);
/// ```
#[derive(Clone)]
pub struct LineFunction<G> {
    objective: G,
    origin: Vec<f64>,
    direction: Vec<f64>,
}

impl<G> LineFunction<G>
where
    G: Fn(&[f64]) -> (f64, Vec<f64>),
{
    /// Restrict `objective` to the line through `origin` along `direction`.
    ///
    /// # Errors
    ///
    /// `InterpolationError::InvalidInput` if `origin` is empty or the two
    /// vectors differ in length.
    pub fn new(
        objective: G,
        origin: Vec<f64>,
        direction: Vec<f64>,
    ) -> Result<Self, InterpolationError> {
        if origin.is_empty() {
            return Err(InterpolationError::InvalidInput(
                "line origin must be non-empty".to_string(),
            ));
        }
        if origin.len() != direction.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "origin has dimension {}, direction has dimension {}",
                origin.len(),
                direction.len()
            )));
        }
        Ok(Self {
            objective,
            origin,
            direction,
        })
    }

    /// Dimension of the underlying space.
    pub fn dimension(&self) -> usize {
        self.origin.len()
    }

    /// Base point of the line.
    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    /// Direction of the line.
    pub fn direction(&self) -> &[f64] {
        &self.direction
    }

    /// `origin + t * direction`.
    pub fn point(&self, t: f64) -> Vec<f64> {
        self.direction
            .iter()
            .zip(&self.origin)
            .map(|(d, o)| d.mul_add(t, *o))
            .collect()
    }

    /// Evaluate the objective at step `t`.
    pub fn evaluate(&self, t: f64) -> LineEvaluation {
        let point = self.point(t);
        let (value, gradient) = (self.objective)(&point);
        debug_assert_eq!(gradient.len(), point.len(), "gradient dimension mismatch");
        let slope = dot(&gradient, &self.direction);
        LineEvaluation {
            t,
            value,
            slope,
            point,
            gradient,
        }
    }
}

impl<G> ScalarFunction for LineFunction<G>
where
    G: Fn(&[f64]) -> (f64, Vec<f64>),
{
    fn value(&self, t: f64) -> f64 {
        (self.objective)(&self.point(t)).0
    }

    fn slope(&self, t: f64) -> f64 {
        let (_, gradient) = (self.objective)(&self.point(t));
        dot(&gradient, &self.direction)
    }
}

impl<G> fmt::Debug for LineFunction<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineFunction")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |acc, (x, y)| x.mul_add(*y, acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bowl(p: &[f64]) -> (f64, Vec<f64>) {
        // (x - 1)^2 + 10 (y + 2)^2
        let (dx, dy) = (p[0] - 1.0, p[1] + 2.0);
        (dx * dx + 10.0 * dy * dy, vec![2.0 * dx, 20.0 * dy])
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_dimension_mismatch_rejected() {
        let err = LineFunction::new(bowl, vec![0.0, 0.0], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            InterpolationError::InvalidInput(
                "origin has dimension 2, direction has dimension 1".to_string()
            )
        );
        assert!(LineFunction::new(bowl, vec![], vec![]).is_err());
    }

    #[test]
    fn test_accessors() {
        let line = LineFunction::new(bowl, vec![0.0, 0.0], vec![1.0, -2.0]).unwrap();
        assert_eq!(line.dimension(), 2);
        assert_eq!(line.origin(), &[0.0, 0.0]);
        assert_eq!(line.direction(), &[1.0, -2.0]);
        assert_eq!(line.point(0.5), vec![0.5, -1.0]);
    }

    // ========================================
    // Evaluation
    // ========================================

    #[test]
    fn test_evaluate_matches_scalar_view() {
        let line = LineFunction::new(bowl, vec![0.0, 0.0], vec![1.0, -2.0]).unwrap();
        for &t in &[-1.0, 0.0, 0.25, 1.0, 3.0] {
            let e = line.evaluate(t);
            assert_eq!(e.t, t);
            assert_eq!(e.value, line.value(t));
            assert_eq!(e.slope, line.slope(t));
            assert_eq!(e.point, line.point(t));
            assert_eq!(e.gradient, bowl(&e.point).1);
        }
    }

    #[test]
    fn test_slope_is_directional_derivative() {
        let line = LineFunction::new(bowl, vec![0.3, -0.7], vec![0.6, 0.8]).unwrap();
        let h = 1e-6;
        for &t in &[-2.0, 0.0, 1.5] {
            let fd = (line.value(t + h) - line.value(t - h)) / (2.0 * h);
            assert_relative_eq!(line.slope(t), fd, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_evaluations_are_independent() {
        let line = LineFunction::new(bowl, vec![0.0, 0.0], vec![1.0, -2.0]).unwrap();
        let first = line.evaluate(1.0);
        let _ = line.evaluate(5.0);
        assert_eq!(first, line.evaluate(1.0));
    }

    #[test]
    fn test_display_lists_coordinates() {
        let line = LineFunction::new(bowl, vec![0.0, 0.0], vec![1.0, 0.0]).unwrap();
        let text = format!("{}", line.evaluate(1.0));
        assert!(text.starts_with("LineEvaluation t=1E0"));
        assert_eq!(text.lines().count(), 4);
        assert!(format!("{:?}", line).contains("LineFunction"));
    }
}
