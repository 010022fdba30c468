/// Evaluate an interest factor using its standard notation.
///
/// Expands to the matching factor function, so the inputs are validated the same way.
/// Usage:
/// ```rust
/// # use intfactors::prelude::*;
/// let ap = factor!(A / P, 0.10, 5)?;
/// let pa = factor!(P / A, 0.10, 5)?;
/// assert!((ap * pa - 1.0).abs() < 1e-12);
/// # FactorResult::Ok(())
/// ```
#[macro_export]
macro_rules! factor {
    (F / P, $i:expr, $n:expr $(,)?) => {
        $crate::factors::single_payment_compound_amount_factor($i, $n)
    };
    (P / F, $i:expr, $n:expr $(,)?) => {
        $crate::factors::single_payment_present_worth_factor($i, $n)
    };
    (F / A, $i:expr, $n:expr $(,)?) => {
        $crate::factors::uniform_series_compound_amount_factor($i, $n)
    };
    (P / A, $i:expr, $n:expr $(,)?) => {
        $crate::factors::uniform_series_present_worth_factor($i, $n)
    };
    (A / F, $i:expr, $n:expr $(,)?) => {
        $crate::factors::sinking_fund_factor($i, $n)
    };
    (A / P, $i:expr, $n:expr $(,)?) => {
        $crate::factors::capital_recovery_factor($i, $n)
    };
    (P / G, $i:expr, $n:expr $(,)?) => {
        $crate::factors::arithmetic_gradient_present_worth_factor($i, $n)
    };
    (A / G, $i:expr, $n:expr $(,)?) => {
        $crate::factors::arithmetic_gradient_uniform_series_factor($i, $n)
    };
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use crate::factors::*;

    #[test]
    fn test_factor_macro_dispatch() {
        assert_eq!(
            factor!(F / P, 0.10, 5).unwrap(),
            single_payment_compound_amount_factor(0.10, 5).unwrap()
        );
        assert_eq!(
            factor!(A / F, 0.04, 8).unwrap(),
            sinking_fund_factor(0.04, 8).unwrap()
        );
        assert_eq!(
            factor!(A / G, 0.04, 8,).unwrap(),
            arithmetic_gradient_uniform_series_factor(0.04, 8).unwrap()
        );
    }

    #[test]
    fn test_factor_macro_propagates_errors() {
        assert!(factor!(P / F, 0.0, 5).is_err());
        assert!(factor!(P / G, 0.05, 0).is_err());
    }
}
