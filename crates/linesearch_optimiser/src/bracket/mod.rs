//! Minimum bracketing.
//!
//! A minimum bracket is three points `x0 < x1 < x2` with
//! `f(x0) > f(x1) < f(x2)`: a continuous `f` has a local minimum in
//! `(x0, x2)`.
//!
//! ## Available Types
//!
//! - [`DoubleBracket`]: three strictly increasing doubles
//! - [`BracketConfig`]: expansion constants and the iteration cap
//! - [`BracketFinder`]: downhill expansion with parabolic extrapolation
//!   (Press et al., *Numerical Recipes*, 3rd ed., section 10.1)

mod config;
mod double_bracket;
mod finder;

pub use config::BracketConfig;
pub use double_bracket::DoubleBracket;
pub use finder::BracketFinder;
