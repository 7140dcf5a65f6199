//! Bracket finder configuration.

use linesearch_core::math::ulp;

/// Constants of the downhill bracket search.
///
/// # Example
///
/// ```
/// use linesearch_optimiser::bracket::BracketConfig;
///
/// let config = BracketConfig::default();
/// assert_eq!(config.max_magnification, 100.0);
/// assert_eq!(config.max_iterations, 100);
///
/// // Custom configuration
/// let custom = BracketConfig {
///     max_iterations: 20,
///     ..BracketConfig::default()
/// };
/// assert_eq!(custom.max_iterations, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketConfig {
    /// Ratio by which successive golden steps grow.
    ///
    /// Default: `(1 + sqrt(5)) / 2`
    pub golden_ratio: f64,

    /// Largest parabolic step, as a multiple of the current step.
    ///
    /// Default: 100
    pub max_magnification: f64,

    /// Floor on the magnitude of the parabola denominator.
    ///
    /// Default: `ulp(1e-4)`, roughly `1e-20`
    pub tiny: f64,

    /// Maximum number of expansion steps before giving up.
    ///
    /// The search returns `SolverError::MaxIterationsExceeded` after this
    /// many steps without a bracket.
    /// Default: 100
    pub max_iterations: usize,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            golden_ratio: 0.5 * (1.0 + 5.0_f64.sqrt()),
            max_magnification: 100.0,
            tiny: ulp(1.0e-4),
            max_iterations: 100,
        }
    }
}

impl BracketConfig {
    /// Create a configuration with the given constants.
    ///
    /// # Panics
    ///
    /// Panics if `golden_ratio <= 1`, `max_magnification <= golden_ratio`,
    /// `tiny <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use linesearch_optimiser::bracket::BracketConfig;
    ///
    /// let config = BracketConfig::new(2.0, 50.0, 1e-20, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(golden_ratio: f64, max_magnification: f64, tiny: f64, max_iterations: usize) -> Self {
        assert!(golden_ratio > 1.0, "golden_ratio must be > 1");
        assert!(
            max_magnification > golden_ratio,
            "max_magnification must exceed golden_ratio"
        );
        assert!(tiny > 0.0, "tiny must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            golden_ratio,
            max_magnification,
            tiny,
            max_iterations,
        }
    }

    /// Allow long parabolic jumps and many steps, for objectives whose
    /// minimum may lie far from the starting points.
    pub fn wide() -> Self {
        Self {
            max_magnification: 1000.0,
            max_iterations: 1000,
            ..Self::default()
        }
    }

    /// Short parabolic jumps and an early give-up.
    pub fn strict() -> Self {
        Self {
            max_magnification: 10.0,
            max_iterations: 50,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BracketConfig::default();
        assert!((config.golden_ratio - 1.618_033_988_749_895).abs() < 1e-15);
        assert_eq!(config.max_magnification, 100.0);
        assert!(config.tiny > 0.0 && config.tiny < 1e-19);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_new_config() {
        let config = BracketConfig::new(1.5, 20.0, 1e-18, 30);
        assert_eq!(config.golden_ratio, 1.5);
        assert_eq!(config.max_magnification, 20.0);
        assert_eq!(config.max_iterations, 30);
    }

    #[test]
    #[should_panic(expected = "golden_ratio must be > 1")]
    fn test_new_config_small_ratio_panics() {
        let _ = BracketConfig::new(1.0, 100.0, 1e-20, 100);
    }

    #[test]
    #[should_panic(expected = "max_magnification must exceed golden_ratio")]
    fn test_new_config_small_magnification_panics() {
        let _ = BracketConfig::new(1.6, 1.5, 1e-20, 100);
    }

    #[test]
    #[should_panic(expected = "tiny must be positive")]
    fn test_new_config_zero_tiny_panics() {
        let _ = BracketConfig::new(1.6, 100.0, 0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_config_zero_iterations_panics() {
        let _ = BracketConfig::new(1.6, 100.0, 1e-20, 0);
    }

    #[test]
    fn test_presets() {
        let wide = BracketConfig::wide();
        let strict = BracketConfig::strict();
        let default = BracketConfig::default();
        assert!(wide.max_magnification > default.max_magnification);
        assert!(wide.max_iterations > default.max_iterations);
        assert!(strict.max_magnification < default.max_magnification);
        assert!(strict.max_iterations < default.max_iterations);
        assert_eq!(wide.golden_ratio, default.golden_ratio);
        assert_eq!(strict.tiny, default.tiny);
    }

    #[test]
    fn test_config_copy() {
        let config1 = BracketConfig::default();
        let config2 = config1;
        assert_eq!(config1, config2);
    }
}
