//! # Discrete Compound-Interest Factors
//!
//! Closed-form factors relating a present amount `P`, a future amount `F`, a uniform
//! end-of-period series `A` and an arithmetic gradient `G` under compound interest.
//!
//! Every factor function validates its inputs before computing:
//! - `interest_rate` must lie strictly between 0.0 and 1.0
//! - `num_periods` must be at least 1
//!
//! Violations return [`FactorError::InvalidArgument`](crate::FactorError::InvalidArgument).
//!
//! | Function | Notation | Formula |
//! |---|---|---|
//! | [`single_payment_compound_amount_factor`] | (F/P, i, n) | (1+i)ⁿ |
//! | [`single_payment_present_worth_factor`] | (P/F, i, n) | (1+i)⁻ⁿ |
//! | [`uniform_series_compound_amount_factor`] | (F/A, i, n) | ((1+i)ⁿ − 1) / i |
//! | [`uniform_series_present_worth_factor`] | (P/A, i, n) | ((1+i)ⁿ − 1) / (i(1+i)ⁿ) |
//! | [`sinking_fund_factor`] | (A/F, i, n) | i / ((1+i)ⁿ − 1) |
//! | [`capital_recovery_factor`] | (A/P, i, n) | i / (1 − (1+i)⁻ⁿ) |
//! | [`arithmetic_gradient_present_worth_factor`] | (P/G, i, n) | ((1+i)ⁿ − in − 1) / (i²(1+i)ⁿ) |
//! | [`arithmetic_gradient_uniform_series_factor`] | (A/G, i, n) | 1/i − n / ((1+i)ⁿ − 1) |

use crate::FactorResult;
use crate::helpers::{check_factor_inputs, growth};
use bon::{bon, builder};

// ===============================================
// FACTOR KINDS
// ===============================================

/// The interest factors provided by this module, named after what they convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    /// (F/P, i, n): future value of one present unit.
    SinglePaymentCompoundAmount,

    /// (P/F, i, n): present value of one future unit.
    SinglePaymentPresentWorth,

    /// (F/A, i, n): future value of a unit annuity.
    UniformSeriesCompoundAmount,

    /// (P/A, i, n): present value of a unit annuity.
    UniformSeriesPresentWorth,

    /// (A/F, i, n): periodic deposit accumulating to one future unit.
    SinkingFund,

    /// (A/P, i, n): periodic recovery of one present unit.
    CapitalRecovery,

    /// (P/G, i, n): present value of a unit arithmetic gradient.
    ArithmeticGradientPresentWorth,

    /// (A/G, i, n): uniform series equivalent to a unit arithmetic gradient.
    ArithmeticGradientUniformSeries,
}

impl FactorKind {
    /// Every factor kind, in declaration order.
    pub const ALL: [FactorKind; 8] = [
        FactorKind::SinglePaymentCompoundAmount,
        FactorKind::SinglePaymentPresentWorth,
        FactorKind::UniformSeriesCompoundAmount,
        FactorKind::UniformSeriesPresentWorth,
        FactorKind::SinkingFund,
        FactorKind::CapitalRecovery,
        FactorKind::ArithmeticGradientPresentWorth,
        FactorKind::ArithmeticGradientUniformSeries,
    ];

    /// Standard functional notation, e.g. `(A/P, i, n)` for capital recovery.
    pub fn notation(self) -> &'static str {
        match self {
            FactorKind::SinglePaymentCompoundAmount => "(F/P, i, n)",
            FactorKind::SinglePaymentPresentWorth => "(P/F, i, n)",
            FactorKind::UniformSeriesCompoundAmount => "(F/A, i, n)",
            FactorKind::UniformSeriesPresentWorth => "(P/A, i, n)",
            FactorKind::SinkingFund => "(A/F, i, n)",
            FactorKind::CapitalRecovery => "(A/P, i, n)",
            FactorKind::ArithmeticGradientPresentWorth => "(P/G, i, n)",
            FactorKind::ArithmeticGradientUniformSeries => "(A/G, i, n)",
        }
    }

    /// The factor whose value is the reciprocal of this one for the same `i` and `n`.
    ///
    /// Gradient factors have no reciprocal counterpart in this module.
    ///
    /// ```rust
    /// # use intfactors::prelude::*;
    /// assert_eq!(FactorKind::SinkingFund.reciprocal(), Some(FactorKind::UniformSeriesCompoundAmount));
    /// assert_eq!(FactorKind::ArithmeticGradientPresentWorth.reciprocal(), None);
    /// ```
    pub fn reciprocal(self) -> Option<FactorKind> {
        match self {
            FactorKind::SinglePaymentCompoundAmount => Some(FactorKind::SinglePaymentPresentWorth),
            FactorKind::SinglePaymentPresentWorth => Some(FactorKind::SinglePaymentCompoundAmount),
            FactorKind::UniformSeriesCompoundAmount => Some(FactorKind::SinkingFund),
            FactorKind::SinkingFund => Some(FactorKind::UniformSeriesCompoundAmount),
            FactorKind::UniformSeriesPresentWorth => Some(FactorKind::CapitalRecovery),
            FactorKind::CapitalRecovery => Some(FactorKind::UniformSeriesPresentWorth),
            FactorKind::ArithmeticGradientPresentWorth
            | FactorKind::ArithmeticGradientUniformSeries => None,
        }
    }

    /// Evaluate the formula without checking the inputs.
    fn apply(self, interest_rate: f64, num_periods: u32) -> f64 {
        match self {
            FactorKind::SinglePaymentCompoundAmount => f_given_p(interest_rate, num_periods),
            FactorKind::SinglePaymentPresentWorth => p_given_f(interest_rate, num_periods),
            FactorKind::UniformSeriesCompoundAmount => f_given_a(interest_rate, num_periods),
            FactorKind::UniformSeriesPresentWorth => p_given_a(interest_rate, num_periods),
            FactorKind::SinkingFund => a_given_f(interest_rate, num_periods),
            FactorKind::CapitalRecovery => a_given_p(interest_rate, num_periods),
            FactorKind::ArithmeticGradientPresentWorth => p_given_g(interest_rate, num_periods),
            FactorKind::ArithmeticGradientUniformSeries => a_given_g(interest_rate, num_periods),
        }
    }
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notation())
    }
}

// ===============================================
// VALIDATED PARAMETERS
// ===============================================

/// An interest rate and period count that have already passed validation.
///
/// Build once, then evaluate any number of factors without re-checking the inputs.
///
/// # Example
/// ```rust
/// # use intfactors::prelude::*;
/// let params = FactorParams::builder().interest_rate(0.10).num_periods(5).build()?;
/// let fp = params.evaluate(FactorKind::SinglePaymentCompoundAmount);
/// let pf = params.evaluate(FactorKind::SinglePaymentPresentWorth);
/// assert!((fp * pf - 1.0).abs() < 1e-12);
/// # FactorResult::Ok(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorParams {
    interest_rate: f64,
    num_periods: u32,
}

#[bon]
impl FactorParams {
    #[builder]
    pub fn new(interest_rate: f64, num_periods: u32) -> FactorResult<Self> {
        check_factor_inputs(interest_rate, num_periods)?;
        Ok(FactorParams {
            interest_rate,
            num_periods,
        })
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn num_periods(&self) -> u32 {
        self.num_periods
    }

    /// Value of the factor `kind` at these parameters.
    pub fn evaluate(&self, kind: FactorKind) -> f64 {
        kind.apply(self.interest_rate, self.num_periods)
    }
}

// ===============================================
// BUILDER ENTRY POINT
// ===============================================

/// Any interest factor selected by [`FactorKind`].
///
/// # Parameters
/// - `kind`: Which factor to evaluate
/// - `interest_rate`: Periodic interest rate, strictly between 0.0 and 1.0
/// - `num_periods`: Number of compounding periods, at least 1
/// - `validate`: Check the inputs first (default `true`). When `false` the formula is
///   evaluated as-is and degenerate inputs produce ordinary IEEE-754 results.
///
/// # Example
/// ```rust
/// # use intfactors::prelude::*;
/// let ap = compound_interest_factor()
///     .kind(FactorKind::CapitalRecovery)
///     .interest_rate(0.10)
///     .num_periods(5)
///     .call()?;
/// println!("(A/P, 10%, 5): {:.5}", ap);
/// # FactorResult::Ok(())
/// ```
#[builder]
pub fn compound_interest_factor(
    kind: FactorKind,
    interest_rate: f64,
    num_periods: u32,
    #[builder(default = true)] validate: bool,
) -> FactorResult<f64> {
    if validate {
        check_factor_inputs(interest_rate, num_periods)?;
    }
    Ok(kind.apply(interest_rate, num_periods))
}

// ===============================================
// SINGLE PAYMENT FACTORS
// ===============================================

/// Single payment compound amount factor (F/P, i, n).
///
/// Future value after `num_periods` periods of one unit invested today.
///
/// # Formula
/// ```text
/// (F/P, i, n) = (1 + i)ⁿ
/// ```
///
/// # Example
/// ```rust
/// # use intfactors::prelude::*;
/// let fp = single_payment_compound_amount_factor(0.10, 5)?;
/// assert!((fp - 1.61051).abs() < 1e-5);
/// # FactorResult::Ok(())
/// ```
pub fn single_payment_compound_amount_factor(
    interest_rate: f64,
    num_periods: u32,
) -> FactorResult<f64> {
    check_factor_inputs(interest_rate, num_periods)?;
    Ok(f_given_p(interest_rate, num_periods))
}

/// Single payment present worth factor (P/F, i, n).
///
/// Present value of one unit received after `num_periods` periods.
///
/// # Formula
/// ```text
/// (P/F, i, n) = (1 + i)⁻ⁿ
/// ```
pub fn single_payment_present_worth_factor(
    interest_rate: f64,
    num_periods: u32,
) -> FactorResult<f64> {
    check_factor_inputs(interest_rate, num_periods)?;
    Ok(p_given_f(interest_rate, num_periods))
}

// ===============================================
// UNIFORM SERIES FACTORS
// ===============================================

/// Uniform series compound amount factor (F/A, i, n).
///
/// Future value at the end of period `n` of one unit paid at the end of every period.
///
/// # Formula
/// ```text
/// (F/A, i, n) = ((1 + i)ⁿ - 1) / i
/// ```
pub fn uniform_series_compound_amount_factor(
    interest_rate: f64,
    num_periods: u32,
) -> FactorResult<f64> {
    check_factor_inputs(interest_rate, num_periods)?;
    Ok(f_given_a(interest_rate, num_periods))
}

/// Uniform series present worth factor (P/A, i, n).
///
/// Present value of one unit paid at the end of every period for `num_periods` periods.
///
/// # Formula
/// ```text
/// (P/A, i, n) = ((1 + i)ⁿ - 1) / (i · (1 + i)ⁿ)
/// ```
///
/// # Example
/// ```rust
/// # use intfactors::prelude::*;
/// let pa = uniform_series_present_worth_factor(0.08, 10)?;
/// assert!((pa - 6.71008).abs() < 1e-5);
/// # FactorResult::Ok(())
/// ```
pub fn uniform_series_present_worth_factor(
    interest_rate: f64,
    num_periods: u32,
) -> FactorResult<f64> {
    check_factor_inputs(interest_rate, num_periods)?;
    Ok(p_given_a(interest_rate, num_periods))
}

/// Sinking fund factor (A/F, i, n).
///
/// End-of-period deposit that accumulates to one unit after `num_periods` periods.
///
/// # Formula
/// ```text
/// (A/F, i, n) = i / ((1 + i)ⁿ - 1)
/// ```
pub fn sinking_fund_factor(interest_rate: f64, num_periods: u32) -> FactorResult<f64> {
    check_factor_inputs(interest_rate, num_periods)?;
    Ok(a_given_f(interest_rate, num_periods))
}

/// Capital recovery factor (A/P, i, n).
///
/// End-of-period withdrawal that exactly exhausts one unit invested today.
///
/// # Formula
/// ```text
/// (A/P, i, n) = i / (1 - (1 + i)⁻ⁿ)
/// ```
///
/// # Example
/// ```rust
/// # use intfactors::prelude::*;
/// // Yearly payment on a 10,000 loan at 6% over 10 years
/// let payment = 10_000.0 * capital_recovery_factor(0.06, 10)?;
/// println!("Payment: {:.2}", payment);
/// # FactorResult::Ok(())
/// ```
pub fn capital_recovery_factor(interest_rate: f64, num_periods: u32) -> FactorResult<f64> {
    check_factor_inputs(interest_rate, num_periods)?;
    Ok(a_given_p(interest_rate, num_periods))
}

// ===============================================
// ARITHMETIC GRADIENT FACTORS
// ===============================================

/// Arithmetic gradient present worth factor (P/G, i, n).
///
/// Present value of the series 0, 1, 2, ..., n−1 paid at the end of periods 1 to n.
///
/// # Formula
/// ```text
/// (P/G, i, n) = ((1 + i)ⁿ - i·n - 1) / (i² · (1 + i)ⁿ)
/// ```
pub fn arithmetic_gradient_present_worth_factor(
    interest_rate: f64,
    num_periods: u32,
) -> FactorResult<f64> {
    check_factor_inputs(interest_rate, num_periods)?;
    Ok(p_given_g(interest_rate, num_periods))
}

/// Arithmetic gradient uniform series factor (A/G, i, n).
///
/// # Formula
/// ```text
/// (A/G, i, n) = 1/i - n / ((1 + i)ⁿ - 1)
/// ```
pub fn arithmetic_gradient_uniform_series_factor(
    interest_rate: f64,
    num_periods: u32,
) -> FactorResult<f64> {
    check_factor_inputs(interest_rate, num_periods)?;
    Ok(a_given_g(interest_rate, num_periods))
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

fn f_given_p(i: f64, n: u32) -> f64 {
    growth(i, n)
}

fn p_given_f(i: f64, n: u32) -> f64 {
    (1.0 + i).powf(-(n as f64))
}

fn f_given_a(i: f64, n: u32) -> f64 {
    (growth(i, n) - 1.0) / i
}

fn p_given_a(i: f64, n: u32) -> f64 {
    let g = growth(i, n);
    (g - 1.0) / (i * g)
}

fn a_given_f(i: f64, n: u32) -> f64 {
    i / (growth(i, n) - 1.0)
}

fn a_given_p(i: f64, n: u32) -> f64 {
    i / (1.0 - p_given_f(i, n))
}

fn p_given_g(i: f64, n: u32) -> f64 {
    let g = growth(i, n);
    (g - i * n as f64 - 1.0) / (i * i * g)
}

fn a_given_g(i: f64, n: u32) -> f64 {
    1.0 / i - n as f64 / (growth(i, n) - 1.0)
}
