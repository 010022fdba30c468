//! # intfactors
//!
//! Engineering-economics interest factors and interest rate conversions for Rust.
//!
//! ## Features
//! - **Discrete Compound-Interest Factors**: F/P, P/F, F/A, P/A, A/F, A/P
//! - **Arithmetic Gradient Factors**: P/G, A/G
//! - **Rate Conversions**: nominal to effective (discrete and continuous), effective to nominal periodic and yearly
//! - **Validated Inputs**: every function checks its arguments and returns [`FactorError::InvalidArgument`] on violation
//! - **Builder Pattern**: [`factors::compound_interest_factor`] and [`factors::FactorParams`] select factors by [`factors::FactorKind`]
//!
//! ## Quick Start
//!
//! ```rust
//! use intfactors::prelude::*;
//!
//! // Future value of 1,000 after 5 years at 10%
//! let future = 1_000.0 * single_payment_compound_amount_factor(0.10, 5)?;
//!
//! // Present value of 500 a year for 10 years at 8%
//! let present = 500.0 * uniform_series_present_worth_factor(0.08, 10)?;
//!
//! // 12% nominal compounded monthly
//! let effective = nominal_to_effective_annual_rate(0.12, 12)?;
//!
//! println!("Future value: {:.2}", future);
//! println!("Present value: {:.2}", present);
//! println!("Effective rate: {:.6}", effective);
//! # FactorResult::Ok(())
//! ```
//!
//! ## Notes
//! - Interest rates are decimal fractions strictly between 0.0 and 1.0 (e.g. 0.08 for 8%)
//! - Period counts are `u32` and must be at least 1
//! - All functions are pure and may be called from any thread

pub mod error;
pub mod factors;
mod helpers;
pub mod int_rate_convert;
mod macros;
mod params;
pub mod prelude;

pub use error::FactorError;

pub type FactorResult<T> = Result<T, FactorError>;
