use crate::FactorResult;
use crate::helpers::{check_effective_rate_inputs, check_nominal_rate_inputs};

/// Convert a nominal yearly interest rate to the effective annual rate.
///
/// # Formula
/// ```text
/// i = (1 + r/m)^m - 1
/// ```
/// where:
/// - `r` is the nominal yearly interest rate, strictly between 0.0 and 1.0
/// - `m` is the number of compounding periods per year, at least 1
///
/// # Example
/// ```rust
/// # use intfactors::prelude::nominal_to_effective_annual_rate;
/// let eff = nominal_to_effective_annual_rate(0.12, 12)?; // 12% compounded monthly
/// assert!((eff - 0.126825).abs() < 1e-6);
/// # intfactors::FactorResult::Ok(())
/// ```
pub fn nominal_to_effective_annual_rate(
    nominal_yearly_interest_rate: f64,
    num_compounding_periods_per_year: u32,
) -> FactorResult<f64> {
    check_nominal_rate_inputs(
        nominal_yearly_interest_rate,
        num_compounding_periods_per_year,
    )?;
    let m = num_compounding_periods_per_year as f64;
    Ok((1.0 + nominal_yearly_interest_rate / m).powf(m) - 1.0)
}

/// Convert an effective annual rate to the equivalent rate per compounding period.
///
/// # Formula
/// ```text
/// i_p = (1 + i)^(1/m) - 1
/// ```
/// where:
/// - `i` is the effective annual rate, finite and greater than 0.0
/// - `m` is the number of compounding periods per year, at least 1
///
/// The result is the rate for one period. Multiply by `m`, or call
/// [`effective_annual_to_nominal_yearly_rate`], for the stated yearly rate.
///
/// # Example
/// ```rust
/// # use intfactors::prelude::effective_annual_to_nominal_periodic_rate;
/// let monthly = effective_annual_to_nominal_periodic_rate(0.126825, 12)?;
/// assert!((monthly - 0.01).abs() < 1e-6);
/// # intfactors::FactorResult::Ok(())
/// ```
pub fn effective_annual_to_nominal_periodic_rate(
    effective_annual_rate: f64,
    num_compounding_periods_per_year: u32,
) -> FactorResult<f64> {
    check_effective_rate_inputs(effective_annual_rate, num_compounding_periods_per_year)?;
    let m = num_compounding_periods_per_year as f64;
    Ok((effective_annual_rate + 1.0).powf(1.0 / m) - 1.0)
}

/// Convert an effective annual rate to the nominal yearly rate compounded `m` times a year.
///
/// # Formula
/// ```text
/// r = m · [(1 + i)^(1/m) - 1]
/// ```
///
/// Inverse of [`nominal_to_effective_annual_rate`].
pub fn effective_annual_to_nominal_yearly_rate(
    effective_annual_rate: f64,
    num_compounding_periods_per_year: u32,
) -> FactorResult<f64> {
    let periodic = effective_annual_to_nominal_periodic_rate(
        effective_annual_rate,
        num_compounding_periods_per_year,
    )?;
    Ok(num_compounding_periods_per_year as f64 * periodic)
}

/// Effective annual rate of a nominal yearly rate under continuous compounding.
///
/// # Formula
/// ```text
/// i = e^r - 1
/// ```
/// This is the limit of [`nominal_to_effective_annual_rate`] as the number of
/// compounding periods grows without bound.
pub fn nominal_to_effective_continuous_rate(nominal_yearly_interest_rate: f64) -> FactorResult<f64> {
    check_nominal_rate_inputs(nominal_yearly_interest_rate, 1)?;
    Ok(nominal_yearly_interest_rate.exp() - 1.0)
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::FactorError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fn_nominal_to_effective_annual_rate() {
        let rates = [0.12, 0.06, 0.10, 0.08];
        let periods = [12, 2, 4, 1];
        let expected = [0.126825, 0.0609, 0.103813, 0.08];
        for (k, (rate, m)) in rates.iter().zip(periods.iter()).enumerate() {
            let ans = nominal_to_effective_annual_rate(*rate, *m).unwrap();
            assert_abs_diff_eq!(ans, expected[k], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_fn_effective_annual_to_nominal_periodic_rate() {
        let ans = effective_annual_to_nominal_periodic_rate(0.126825, 12).unwrap();
        assert_abs_diff_eq!(ans, 0.01, epsilon = 1e-6);
        let ans = effective_annual_to_nominal_periodic_rate(0.0609, 2).unwrap();
        assert_abs_diff_eq!(ans, 0.03, epsilon = 1e-9);
    }

    #[test]
    fn test_fn_effective_annual_to_nominal_yearly_rate() {
        let ans = effective_annual_to_nominal_yearly_rate(0.126825, 12).unwrap();
        assert_abs_diff_eq!(ans, 0.12, epsilon = 1e-5);
    }

    #[test]
    fn test_nominal_effective_round_trip() {
        for m in [1, 2, 4, 12, 52, 365] {
            let eff = nominal_to_effective_annual_rate(0.09, m).unwrap();
            let nom = effective_annual_to_nominal_yearly_rate(eff, m).unwrap();
            assert_abs_diff_eq!(nom, 0.09, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_continuous_is_upper_limit() {
        let cont = nominal_to_effective_continuous_rate(0.12).unwrap();
        assert_abs_diff_eq!(cont, 0.127497, epsilon = 1e-6);
        let mut previous = 0.0;
        for m in [1, 2, 4, 12, 365, 100_000] {
            let eff = nominal_to_effective_annual_rate(0.12, m).unwrap();
            assert!(eff > previous && eff < cont);
            previous = eff;
        }
        assert_abs_diff_eq!(previous, cont, epsilon = 1e-6);
    }

    #[test]
    fn test_rate_conversion_rejects_invalid_inputs() {
        let invalid = [
            nominal_to_effective_annual_rate(0.0, 12),
            nominal_to_effective_annual_rate(1.0, 12),
            nominal_to_effective_annual_rate(0.12, 0),
            effective_annual_to_nominal_periodic_rate(0.12, 0),
            effective_annual_to_nominal_periodic_rate(-0.5, 12),
            effective_annual_to_nominal_periodic_rate(f64::NAN, 12),
            nominal_to_effective_continuous_rate(1.2),
        ];
        for result in invalid {
            assert!(matches!(result, Err(FactorError::InvalidArgument(_))));
        }
    }
}
