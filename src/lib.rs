//! Aproximar: Wallis-product approximation of π in pure Rust.
//!
//! Aproximar computes finite truncations of Wallis' infinite product
//! `π = 2·∏ 4i²/(4i²−1)`, accumulating numerator and denominator as
//! exact arbitrary-precision integers and deferring the floating-point
//! division to a single final step. A convergence-sweep harness records
//! `|estimate(n) − π|` across swept term counts for reporting.
//!
//! # Quick Start
//!
//! ```
//! use aproximar::prelude::*;
//!
//! // Ten terms of the product
//! let pi_10 = wallis_pi(10);
//! assert!((pi_10 - 3.0677038066434985).abs() < 1e-12);
//!
//! // Error against π shrinks as O(1/n)
//! let points = ConvergenceSweep::new(vec![10, 1000])?.run();
//! assert!(points[1].abs_error < points[0].abs_error);
//! # Ok::<(), aproximar::AproximarError>(())
//! ```
//!
//! # Modules
//!
//! - [`wallis`]: Core product accumulator and π estimators
//! - [`convergence`]: Error-vs-terms sweep and convergence-order fit
//! - [`error`]: Error types

pub mod convergence;
pub mod error;
pub mod prelude;
pub mod wallis;

pub use error::{AproximarError, Result};
pub use wallis::{wallis_pi, wallis_pi_checked, wallis_pi_running, WallisAccumulator};
