//! Financial parameters for a projection
//!
//! Tax, inflation and discount rates plus the projection horizon, validated
//! at construction so the engine can assume a sane domain.

use serde::Serialize;

use super::ValidationError;

/// Validated tax, inflation and discounting assumptions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialParameters {
    tax_rate: f64,
    inflation_rate: f64,
    discount_rate: f64,
    horizon_years: u32,
}

impl FinancialParameters {
    /// Build a validated parameter set.
    ///
    /// Rates must be finite; tax within [0, 1], inflation and discount within
    /// [0, 1), and the horizon at least one year.
    pub fn new(
        tax_rate: f64,
        inflation_rate: f64,
        discount_rate: f64,
        horizon_years: u32,
    ) -> Result<Self, ValidationError> {
        check_finite("tax rate", tax_rate)?;
        check_finite("inflation rate", inflation_rate)?;
        check_finite("discount rate", discount_rate)?;

        if !(0.0..=1.0).contains(&tax_rate) {
            return Err(ValidationError::TaxRateOutOfRange(tax_rate));
        }
        if !(0.0..1.0).contains(&inflation_rate) {
            return Err(ValidationError::InflationRateOutOfRange(inflation_rate));
        }
        if !(0.0..1.0).contains(&discount_rate) {
            return Err(ValidationError::DiscountRateOutOfRange(discount_rate));
        }
        if horizon_years == 0 {
            return Err(ValidationError::ZeroHorizon);
        }

        Ok(Self {
            tax_rate,
            inflation_rate,
            discount_rate,
            horizon_years,
        })
    }

    /// Corporate tax rate applied to positive pre-tax earnings
    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    /// Annual inflation applied to revenue and operating costs
    pub fn inflation_rate(&self) -> f64 {
        self.inflation_rate
    }

    /// Annual rate used to discount cash flows to year 0
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Projection horizon in years; year 0 is the investment year
    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Present-value factor for a cash flow `year` years out
    pub fn discount_factor(&self, year: u32) -> f64 {
        1.0 / (1.0 + self.discount_rate).powi(year as i32)
    }

    /// Compound inflation index for a projection year (year 1 is indexed once)
    pub fn inflation_index(&self, year: u32) -> f64 {
        (1.0 + self.inflation_rate).powi(year as i32)
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_valid_parameters() {
        let params = FinancialParameters::new(0.30, 0.05, 0.13, 10).unwrap();
        assert_eq!(params.tax_rate(), 0.30);
        assert_eq!(params.inflation_rate(), 0.05);
        assert_eq!(params.discount_rate(), 0.13);
        assert_eq!(params.horizon_years(), 10);
    }

    #[test]
    fn test_boundary_rates_accepted() {
        // Tax may reach 1.0; inflation and discount may be exactly 0
        assert!(FinancialParameters::new(1.0, 0.0, 0.0, 1).is_ok());
    }

    #[test]
    fn test_rejects_nan_rate() {
        let result = FinancialParameters::new(f64::NAN, 0.05, 0.13, 10);
        assert!(matches!(result, Err(ValidationError::NonFinite { .. })));
    }

    #[test]
    fn test_rejects_tax_above_one() {
        let result = FinancialParameters::new(1.2, 0.05, 0.13, 10);
        assert!(matches!(result, Err(ValidationError::TaxRateOutOfRange(_))));
    }

    #[test]
    fn test_rejects_unit_inflation() {
        // 1.0 falls outside the half-open inflation domain
        let result = FinancialParameters::new(0.30, 1.0, 0.13, 10);
        assert!(matches!(
            result,
            Err(ValidationError::InflationRateOutOfRange(_))
        ));
    }

    #[test]
    fn test_rejects_negative_discount() {
        let result = FinancialParameters::new(0.30, 0.05, -0.01, 10);
        assert!(matches!(
            result,
            Err(ValidationError::DiscountRateOutOfRange(_))
        ));
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let result = FinancialParameters::new(0.30, 0.05, 0.13, 0);
        assert!(matches!(result, Err(ValidationError::ZeroHorizon)));
    }

    #[test]
    fn test_discount_factor() {
        let params = FinancialParameters::new(0.0, 0.0, 0.10, 5).unwrap();
        assert_eq!(params.discount_factor(0), 1.0);
        assert_abs_diff_eq!(params.discount_factor(2), 1.0 / 1.21, epsilon = 1e-12);
    }

    #[test]
    fn test_inflation_index_compounds() {
        let params = FinancialParameters::new(0.0, 0.05, 0.0, 5).unwrap();
        assert_eq!(params.inflation_index(0), 1.0);
        assert_abs_diff_eq!(params.inflation_index(1), 1.05, epsilon = 1e-12);
        assert_abs_diff_eq!(params.inflation_index(3), 1.157625, epsilon = 1e-9);
    }
}
