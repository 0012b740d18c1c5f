//! Production parameters
//!
//! Output volume and pricing drive the year-1 revenue line.

use serde::Serialize;

use super::ValidationError;

/// Validated production volume and pricing assumptions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductionParameters {
    daily_output: f64,
    unit_price: f64,
    working_days_per_year: f64,
    unit_conversion_factor: f64,
}

impl ProductionParameters {
    /// Build a validated parameter set; every argument must be positive and finite.
    ///
    /// `unit_conversion_factor` converts output units to pricing units
    /// (e.g. 1000 when output is in tonnes and the price is per kilogram).
    pub fn new(
        daily_output: f64,
        unit_price: f64,
        working_days_per_year: f64,
        unit_conversion_factor: f64,
    ) -> Result<Self, ValidationError> {
        check_positive("daily output", daily_output)?;
        check_positive("unit price", unit_price)?;
        check_positive("working days per year", working_days_per_year)?;
        check_positive("unit conversion factor", unit_conversion_factor)?;

        Ok(Self {
            daily_output,
            unit_price,
            working_days_per_year,
            unit_conversion_factor,
        })
    }

    pub fn daily_output(&self) -> f64 {
        self.daily_output
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn working_days_per_year(&self) -> f64 {
        self.working_days_per_year
    }

    pub fn unit_conversion_factor(&self) -> f64 {
        self.unit_conversion_factor
    }

    /// Annual production volume in output units
    pub fn annual_output(&self) -> f64 {
        self.daily_output * self.working_days_per_year
    }

    /// Year-1 revenue before inflation indexing
    pub fn annual_revenue(&self) -> f64 {
        self.annual_output() * self.unit_conversion_factor * self.unit_price
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { name, value });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lime_plant_volumes() {
        // 600 t/day over 323.62 working days, priced per kg
        let production = ProductionParameters::new(600.0, 103.0, 323.62, 1000.0).unwrap();
        assert_abs_diff_eq!(production.annual_output(), 194_172.0, epsilon = 1e-6);
        assert_abs_diff_eq!(production.annual_revenue(), 19_999_716_000.0, epsilon = 1e-2);
    }

    #[test]
    fn test_identity_conversion() {
        let production = ProductionParameters::new(10.0, 5.0, 200.0, 1.0).unwrap();
        assert_eq!(production.annual_revenue(), 10_000.0);
    }

    #[test]
    fn test_rejects_zero_output() {
        let result = ProductionParameters::new(0.0, 103.0, 323.62, 1000.0);
        assert!(matches!(result, Err(ValidationError::NonPositive { .. })));
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = ProductionParameters::new(600.0, -103.0, 323.62, 1000.0);
        assert!(matches!(result, Err(ValidationError::NonPositive { .. })));
    }

    #[test]
    fn test_rejects_infinite_days() {
        let result = ProductionParameters::new(600.0, 103.0, f64::INFINITY, 1000.0);
        assert!(matches!(result, Err(ValidationError::NonFinite { .. })));
    }
}
