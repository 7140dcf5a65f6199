//! Knot sets: where an objective's value and slope are sampled.
//!
//! A model of degree `n` needs `n + 1` conditions. Value knots contribute
//! `(x, f(x))` and slope knots `(x, f'(x))`. Distinctness is plain `==` on
//! the x-coordinates, with no tolerance.

/// Value and slope knot x-coordinates.
///
/// # Examples
/// ```
/// use linesearch_models::knots::Knots;
///
/// // Cubic Hermite: values and slopes at the same two points
/// let knots = Knots::new(vec![0.0, 1.0], vec![0.0, 1.0]);
/// assert_eq!(knots.degree(), Some(3));
/// assert!(knots.is_valid_for(3));
///
/// // A repeated value knot carries no information
/// assert!(!Knots::values_only(vec![1.0, 1.0, 2.0]).is_valid_for(2));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knots {
    values: Vec<f64>,
    slopes: Vec<f64>,
}

impl Knots {
    /// Knot set from value and slope x-coordinates.
    pub fn new(values: Vec<f64>, slopes: Vec<f64>) -> Self {
        Self { values, slopes }
    }

    /// Knot set with value knots only.
    pub fn values_only(values: Vec<f64>) -> Self {
        Self::new(values, Vec::new())
    }

    /// x-coordinates where the value is sampled.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// x-coordinates where the slope is sampled.
    #[inline]
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    /// Number of distinct value knots.
    pub fn distinct_values(&self) -> usize {
        distinct(&self.values)
    }

    /// Number of distinct slope knots.
    pub fn distinct_slopes(&self) -> usize {
        distinct(&self.slopes)
    }

    /// `#values + #slopes - 1`, or `None` for an empty set.
    pub fn degree(&self) -> Option<usize> {
        (self.values.len() + self.slopes.len()).checked_sub(1)
    }

    /// At least one distinct value knot, no repeats within either set, and
    /// exactly `degree + 1` conditions.
    pub fn is_valid_for(&self, degree: usize) -> bool {
        let nv = self.distinct_values();
        let ns = self.distinct_slopes();
        nv >= 1
            && nv == self.values.len()
            && ns == self.slopes.len()
            && nv + ns == degree + 1
    }

    /// Returns true if every slope knot is also a value knot and vice versa.
    pub fn same_coordinates(&self) -> bool {
        self.values.len() == self.slopes.len()
            && self.values.iter().all(|x| self.slopes.contains(x))
            && self.slopes.iter().all(|x| self.values.contains(x))
    }
}

fn distinct(xs: &[f64]) -> usize {
    xs.iter()
        .enumerate()
        .filter(|&(i, x)| !xs[..i].contains(x))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree() {
        assert_eq!(Knots::default().degree(), None);
        assert_eq!(Knots::values_only(vec![1.0]).degree(), Some(0));
        assert_eq!(Knots::new(vec![0.999], vec![1.0, 1.001]).degree(), Some(2));
    }

    #[test]
    fn test_distinct_uses_float_equality() {
        let k = Knots::new(vec![0.0, -0.0, 1.0], vec![2.0, 2.0]);
        assert_eq!(k.distinct_values(), 2);
        assert_eq!(k.distinct_slopes(), 1);
        assert!(!k.is_valid_for(4));
    }

    #[test]
    fn test_slope_only_is_invalid() {
        let k = Knots::new(vec![], vec![0.0, 1.0]);
        assert!(!k.is_valid_for(1));
    }

    #[test]
    fn test_shared_value_and_slope_knot_is_valid() {
        let k = Knots::new(vec![0.998, 1.001], vec![0.998]);
        assert!(k.is_valid_for(2));
        assert!(!k.is_valid_for(3));
        assert!(!k.same_coordinates());
    }

    #[test]
    fn test_same_coordinates_any_order() {
        assert!(Knots::new(vec![-1e2, 0.01], vec![0.01, -1e2]).same_coordinates());
        assert!(!Knots::new(vec![0.0, 1.0], vec![0.0, 2.0]).same_coordinates());
    }
}
