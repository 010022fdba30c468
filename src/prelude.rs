//! # intfactors Prelude
//!
//! Conveniently re-exports every factor, rate conversion and supporting type.
//! Import this module to access the whole library with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use intfactors::prelude::*;
//! let payment = 25_000.0 * factor!(A / P, 0.07, 5)?;
//! let monthly = effective_annual_to_nominal_periodic_rate(0.07, 12)?;
//! println!("Yearly payment: {:.2}, monthly rate: {:.6}", payment, monthly);
//! # FactorResult::Ok(())
//! ```

// Package Result and error types
pub use crate::{FactorError, FactorResult};

// Compound-interest factors
pub use crate::factors::*;

// Interest rate conversion functions
pub use crate::int_rate_convert::*;

// Notation macro
pub use crate::factor;
