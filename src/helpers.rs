use crate::FactorResult;
use crate::params::{EffectiveRateInputs, FactorInputs, NominalRateInputs};
use garde::Validate;

// ================================================
// PUBLIC FUNCTIONS
// ================================================

/// Growth of one unit over `num_periods` periods: (1 + r)ⁿ
pub(crate) fn growth(interest_rate: f64, num_periods: u32) -> f64 {
    (1.0 + interest_rate).powf(num_periods as f64)
}

pub(crate) fn check_factor_inputs(interest_rate: f64, num_periods: u32) -> FactorResult<()> {
    let inputs = FactorInputs {
        interest_rate,
        num_periods,
    };
    inputs.validate().map_err(|report| {
        log::debug!("rejected factor inputs {inputs:?}: {report}");
        report.into()
    })
}

pub(crate) fn check_nominal_rate_inputs(
    nominal_yearly_interest_rate: f64,
    num_compounding_periods_per_year: u32,
) -> FactorResult<()> {
    let inputs = NominalRateInputs {
        nominal_yearly_interest_rate,
        num_compounding_periods_per_year,
    };
    inputs.validate().map_err(|report| {
        log::debug!("rejected nominal rate inputs {inputs:?}: {report}");
        report.into()
    })
}

pub(crate) fn check_effective_rate_inputs(
    effective_annual_rate: f64,
    num_compounding_periods_per_year: u32,
) -> FactorResult<()> {
    let inputs = EffectiveRateInputs {
        effective_annual_rate,
        num_compounding_periods_per_year,
    };
    inputs.validate().map_err(|report| {
        log::debug!("rejected effective rate inputs {inputs:?}: {report}");
        report.into()
    })
}
