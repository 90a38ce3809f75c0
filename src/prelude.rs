//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use aproximar::prelude::*;
//! ```

pub use crate::convergence::{ConvergenceSweep, SweepPoint};
pub use crate::error::{AproximarError, Result};
pub use crate::wallis::{wallis_pi, wallis_pi_checked, wallis_pi_running, WallisAccumulator};
