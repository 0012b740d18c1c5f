//! Internal Rate of Return (IRR) calculation
//!
//! Used to derive the return metric from projected annual cash flows

/// Calculate the Internal Rate of Return (IRR) for a series of annual cash
/// flows using the Newton-Raphson method.
///
/// # Arguments
/// * `cashflows` - Cash flows indexed by year (positive = inflow, negative = outflow)
///
/// # Returns
/// * `Option<f64>` - Annual IRR as a decimal (e.g., 0.05 for 5%), or None if no solution found
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    // Handle edge cases
    if cashflows.is_empty() {
        return None;
    }

    // Check if there's at least one sign change (required for IRR to exist)
    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return None; // No sign change means no IRR
    }

    // Newton-Raphson iteration
    let mut rate = 0.05; // Initial guess: 5%
    let tolerance = 1e-10;
    let max_iterations = 1000;

    for _ in 0..max_iterations {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < 1e-20 {
            // Derivative too small, try bisection instead
            return calculate_irr_bisection(cashflows);
        }

        let new_rate = rate - npv / dnpv;

        // Bound the rate to reasonable values
        let new_rate = new_rate.max(-0.99).min(10.0);

        if (new_rate - rate).abs() < tolerance {
            // A stall at a range bound means the root, if there is one,
            // lies outside the range; try bisection instead
            if new_rate <= -0.99 || new_rate >= 10.0 {
                return calculate_irr_bisection(cashflows);
            }
            return Some(new_rate);
        }

        rate = new_rate;
    }

    // Newton-Raphson didn't converge, try bisection
    calculate_irr_bisection(cashflows)
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        let discount = (1.0 + rate).powi(t as i32);
        npv += cf / discount;
        if t > 0 {
            dnpv -= (t as f64) * cf / ((1.0 + rate).powi(t as i32 + 1));
        }
    }

    (npv, dnpv)
}

/// Fallback IRR calculation using bisection method
fn calculate_irr_bisection(cashflows: &[f64]) -> Option<f64> {
    let mut low = -0.99_f64; // -99% annual rate
    let mut high = 10.0_f64; // 1000% annual rate
    let tolerance = 1e-10;
    let max_iterations = 1000;

    let npv_low = npv_at_rate(cashflows, low);
    let npv_high = npv_at_rate(cashflows, high);

    // Check that we have a root in this interval
    if npv_low * npv_high > 0.0 {
        return None;
    }

    for _ in 0..max_iterations {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);

        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }

        if npv_mid * npv_at_rate(cashflows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}

/// Calculate NPV at a given annual rate
fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_irr() {
        // Investment of $1000, returns $1100 after 1 year
        let cashflows = vec![-1000.0, 1100.0];

        let irr = calculate_irr(&cashflows).unwrap();
        assert!((irr - 0.10).abs() < 1e-8, "Expected ~10% IRR, got {}", irr);
    }

    #[test]
    fn test_two_year_irr() {
        // $1000 out, $1210 back in year 2: exact root at 10%
        let cashflows = vec![-1000.0, 0.0, 1210.0];

        let irr = calculate_irr(&cashflows).unwrap();
        assert!((irr - 0.10).abs() < 1e-8, "Expected ~10% IRR, got {}", irr);
    }

    #[test]
    fn test_deeply_negative_irr() {
        // Recovering 140k on a 1m outlay in one year: root at -86%
        let cashflows = vec![-1_000_000.0, 140_000.0];

        let irr = calculate_irr(&cashflows).unwrap();
        assert!((irr + 0.86).abs() < 1e-6, "Expected -86% IRR, got {}", irr);
    }

    #[test]
    fn test_level_cashflows() {
        // Loan of $10000 repaid in 12 annual installments of $900
        let mut cashflows = vec![10000.0];
        cashflows.extend(vec![-900.0; 12]);

        let irr = calculate_irr(&cashflows);
        assert!(irr.is_some());
    }

    #[test]
    fn test_no_sign_change_has_no_irr() {
        assert_eq!(calculate_irr(&[-100.0, -50.0, -10.0]), None);
        assert_eq!(calculate_irr(&[100.0, 50.0, 10.0]), None);
    }

    #[test]
    fn test_root_above_search_range_has_no_irr() {
        // A 35x payoff in one year puts the root at 3400%, past the range cap
        let cashflows = vec![-1000.0, 35_000.0];
        assert_eq!(calculate_irr(&cashflows), None);
    }

    #[test]
    fn test_root_below_search_range_has_no_irr() {
        // Recovering 0.5 on a 100 outlay puts the root at -99.5%, under the
        // range floor
        let cashflows = vec![-100.0, 0.5];
        assert_eq!(calculate_irr(&cashflows), None);
    }

    #[test]
    fn test_all_zero_has_no_irr() {
        assert_eq!(calculate_irr(&[0.0, 0.0, 0.0]), None);
    }

    #[test]
    fn test_empty_has_no_irr() {
        assert_eq!(calculate_irr(&[]), None);
    }
}
