//! Convergence reporting for Wallis-product estimates.
//!
//! Sweeps the approximation across a sequence of term counts and records
//! the absolute error against π at each checkpoint, the data series a
//! log-axis error chart or a regression on convergence order consumes.

use serde::{Deserialize, Serialize};

use crate::error::{AproximarError, Result};
use crate::wallis::WallisAccumulator;

/// One swept term count with its estimate and absolute error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Number of product terms
    pub terms: usize,
    /// Approximation of π at this term count
    pub estimate: f64,
    /// `|estimate − π|`
    pub abs_error: f64,
}

/// An ascending, deduplicated list of term-count checkpoints.
///
/// [`run`](Self::run) advances a single shared accumulator through the
/// checkpoints, so a sweep up to `n` costs one pass of `n` term
/// multiplications rather than one pass per checkpoint.
///
/// # Examples
///
/// ```
/// use aproximar::convergence::ConvergenceSweep;
///
/// let sweep = ConvergenceSweep::new(vec![10, 100, 1000]).unwrap();
/// let points = sweep.run();
/// assert_eq!(points.len(), 3);
/// assert!(points[2].abs_error < points[0].abs_error);
/// ```
#[derive(Debug, Clone)]
pub struct ConvergenceSweep {
    checkpoints: Vec<usize>,
}

impl ConvergenceSweep {
    /// Build a sweep from explicit checkpoints (sorted and deduplicated).
    ///
    /// # Errors
    ///
    /// Returns an error when `checkpoints` is empty.
    pub fn new(mut checkpoints: Vec<usize>) -> Result<Self> {
        if checkpoints.is_empty() {
            return Err(AproximarError::empty_input("checkpoints"));
        }
        checkpoints.sort_unstable();
        checkpoints.dedup();
        Ok(Self { checkpoints })
    }

    /// Build `points` log-spaced checkpoints from 1 to `max_terms`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `max_terms` or `points` is zero.
    pub fn geometric(max_terms: usize, points: usize) -> Result<Self> {
        if max_terms == 0 {
            return Err(AproximarError::invalid_argument(
                "max_terms",
                max_terms,
                ">= 1",
            ));
        }
        if points == 0 {
            return Err(AproximarError::invalid_argument("points", points, ">= 1"));
        }
        if points == 1 {
            return Self::new(vec![max_terms]);
        }
        let checkpoints = (0..points)
            .map(|k| {
                let frac = k as f64 / (points - 1) as f64;
                (max_terms as f64).powf(frac).round() as usize
            })
            .collect();
        Self::new(checkpoints)
    }

    /// The checkpoint list, ascending.
    #[must_use]
    pub fn checkpoints(&self) -> &[usize] {
        &self.checkpoints
    }

    /// Run the sweep, producing one [`SweepPoint`] per checkpoint.
    #[must_use]
    pub fn run(&self) -> Vec<SweepPoint> {
        let mut acc = WallisAccumulator::new();
        self.checkpoints
            .iter()
            .map(|&n| {
                acc.advance_to(n);
                let estimate = acc.estimate();
                SweepPoint {
                    terms: n,
                    estimate,
                    abs_error: (estimate - std::f64::consts::PI).abs(),
                }
            })
            .collect()
    }
}

/// Least-squares slope of `ln(abs_error)` against `ln(terms)`.
///
/// The Wallis truncation error decays as O(1/n), so a geometric sweep
/// yields a slope near −1. Returns `None` with fewer than two usable
/// points (positive term count, positive finite error).
#[must_use]
pub fn empirical_order(points: &[SweepPoint]) -> Option<f64> {
    let samples: Vec<(f64, f64)> = points
        .iter()
        .filter(|p| p.terms > 0 && p.abs_error > 0.0 && p.abs_error.is_finite())
        .map(|p| ((p.terms as f64).ln(), p.abs_error.ln()))
        .collect();
    if samples.len() < 2 {
        return None;
    }

    let n = samples.len() as f64;
    let mean_x = samples.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = samples.iter().map(|(_, y)| y).sum::<f64>() / n;

    let ss_xy: f64 = samples
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let ss_xx: f64 = samples.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();

    if ss_xx == 0.0 {
        return None;
    }
    Some(ss_xy / ss_xx)
}

/// Whether the error series never grows from one checkpoint to the next.
#[must_use]
pub fn is_error_nonincreasing(points: &[SweepPoint]) -> bool {
    points.windows(2).all(|w| w[1].abs_error <= w[0].abs_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_checkpoints_rejected() {
        assert!(ConvergenceSweep::new(vec![]).is_err());
    }

    #[test]
    fn test_checkpoints_sorted_and_deduped() {
        let sweep = ConvergenceSweep::new(vec![100, 1, 10, 10, 1]).unwrap();
        assert_eq!(sweep.checkpoints(), &[1, 10, 100]);
    }

    #[test]
    fn test_geometric_endpoints() {
        let sweep = ConvergenceSweep::geometric(1000, 4).unwrap();
        let cps = sweep.checkpoints();
        assert_eq!(cps.first(), Some(&1));
        assert_eq!(cps.last(), Some(&1000));
        assert!(cps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_geometric_rejects_zero() {
        assert!(ConvergenceSweep::geometric(0, 5).is_err());
        assert!(ConvergenceSweep::geometric(100, 0).is_err());
    }

    #[test]
    fn test_sweep_matches_direct_computation() {
        use crate::wallis::wallis_pi;

        let sweep = ConvergenceSweep::new(vec![1, 10, 100]).unwrap();
        let points = sweep.run();
        for p in &points {
            let direct = wallis_pi(p.terms);
            assert!(
                (p.estimate - direct).abs() < f64::EPSILON,
                "shared-accumulator sweep drifted from direct at n={}",
                p.terms
            );
        }
    }

    #[test]
    fn test_error_nonincreasing_over_sweep() {
        let points = ConvergenceSweep::geometric(2000, 8).unwrap().run();
        assert!(is_error_nonincreasing(&points));
    }

    #[test]
    fn test_empirical_order_near_minus_one() {
        let points = ConvergenceSweep::new(vec![10, 100, 1000]).unwrap().run();
        let slope = empirical_order(&points).unwrap();
        assert!(
            (-1.1..=-0.9).contains(&slope),
            "expected O(1/n) decay, got slope {slope}"
        );
    }

    #[test]
    fn test_empirical_order_needs_two_points() {
        let points = ConvergenceSweep::new(vec![10]).unwrap().run();
        assert!(empirical_order(&points).is_none());
        assert!(empirical_order(&[]).is_none());
    }

    #[test]
    fn test_sweep_point_serialization_roundtrip() {
        let points = ConvergenceSweep::new(vec![1, 10]).unwrap().run();
        let json = serde_json::to_string(&points).unwrap();
        let back: Vec<SweepPoint> = serde_json::from_str(&json).unwrap();
        assert_eq!(points, back);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_one_point_per_checkpoint(max in 1usize..500, points in 1usize..10) {
                let sweep = ConvergenceSweep::geometric(max, points).unwrap();
                let run = sweep.run();
                prop_assert_eq!(run.len(), sweep.checkpoints().len());
            }

            #[test]
            fn prop_error_nonincreasing(max in 2usize..500, points in 2usize..8) {
                let run = ConvergenceSweep::geometric(max, points).unwrap().run();
                prop_assert!(is_error_nonincreasing(&run));
            }
        }
    }
}
