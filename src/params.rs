use garde::Validate;

// =======================================
// DISCRETE FACTOR PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Copy, Validate)]
pub struct FactorInputs {
    // Periodic interest rate as a decimal fraction
    // Open interval (0, 1): both 0% and 100% are rejected
    #[garde(custom(validate_open_unit_rate))]
    pub interest_rate: f64,

    // Number of compounding periods
    #[garde(range(min = 1))]
    pub num_periods: u32,
}

// =======================================
// NOMINAL RATE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Copy, Validate)]
pub struct NominalRateInputs {
    // Stated yearly rate, open interval (0, 1)
    #[garde(custom(validate_open_unit_rate))]
    pub nominal_yearly_interest_rate: f64,

    // Compounding frequency within a year
    #[garde(range(min = 1))]
    pub num_compounding_periods_per_year: u32,
}

// =======================================
// EFFECTIVE RATE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Copy, Validate)]
pub struct EffectiveRateInputs {
    // Realized yearly rate
    // No upper bound: frequent compounding of a valid nominal rate can exceed 100%
    #[garde(custom(validate_positive_finite_rate))]
    pub effective_annual_rate: f64,

    #[garde(range(min = 1))]
    pub num_compounding_periods_per_year: u32,
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

/// Rate must lie strictly between 0.0 and 1.0 (NaN fails both comparisons)
fn validate_open_unit_rate(value: &f64, _context: &()) -> garde::Result {
    if !(*value > 0.0 && *value < 1.0) {
        return Err(garde::Error::new(format!(
            "rate {value} must be strictly between 0.0 and 1.0"
        )));
    }
    Ok(())
}

fn validate_positive_finite_rate(value: &f64, _context: &()) -> garde::Result {
    if !(value.is_finite() && *value > 0.0) {
        return Err(garde::Error::new(format!(
            "rate {value} must be finite and greater than 0.0"
        )));
    }
    Ok(())
}

// =======================================
// UNIT TESTS
// =======================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_inputs_accept_valid_values() {
        let inputs = FactorInputs {
            interest_rate: 0.05,
            num_periods: 12,
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_factor_inputs_reject_rate_bounds() {
        for rate in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            let inputs = FactorInputs {
                interest_rate: rate,
                num_periods: 5,
            };
            let report = inputs.validate().unwrap_err();
            assert!(report.to_string().contains("interest_rate"), "rate {rate}");
        }
    }

    #[test]
    fn test_factor_inputs_reject_zero_periods() {
        let inputs = FactorInputs {
            interest_rate: 0.05,
            num_periods: 0,
        };
        let report = inputs.validate().unwrap_err();
        assert!(report.to_string().contains("num_periods"));
    }

    #[test]
    fn test_factor_inputs_report_both_fields() {
        let inputs = FactorInputs {
            interest_rate: 0.0,
            num_periods: 0,
        };
        let report = inputs.validate().unwrap_err();
        assert_eq!(report.iter().count(), 2);
    }

    #[test]
    fn test_nominal_rate_inputs() {
        let ok = NominalRateInputs {
            nominal_yearly_interest_rate: 0.12,
            num_compounding_periods_per_year: 12,
        };
        assert!(ok.validate().is_ok());

        let bad = NominalRateInputs {
            nominal_yearly_interest_rate: 1.0,
            num_compounding_periods_per_year: 0,
        };
        assert_eq!(bad.validate().unwrap_err().iter().count(), 2);
    }

    #[test]
    fn test_effective_rate_inputs_allow_rates_above_one() {
        let ok = EffectiveRateInputs {
            effective_annual_rate: 1.7,
            num_compounding_periods_per_year: 365,
        };
        assert!(ok.validate().is_ok());

        for rate in [0.0, -0.2, f64::NAN, f64::INFINITY] {
            let bad = EffectiveRateInputs {
                effective_annual_rate: rate,
                num_compounding_periods_per_year: 12,
            };
            assert!(bad.validate().is_err(), "rate {rate}");
        }
    }
}
