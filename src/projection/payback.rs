//! Payback period calculation
//!
//! Finds the first point at which cumulative cash flow turns non-negative

/// Calculate the payback period in fractional years for a series of annual
/// cash flows indexed by year (year 0 holds the initial outlay).
///
/// The crossing is interpolated linearly within the recovery year, so a
/// cumulative balance that turns positive halfway through year 3 reports 2.5.
///
/// # Returns
/// * `Option<f64>` - Years until recovery, or None if the cumulative balance
///   never reaches zero within the series
pub fn payback_period(cashflows: &[f64]) -> Option<f64> {
    let mut cumulative = 0.0;
    let mut prior = 0.0;

    for (year, &cf) in cashflows.iter().enumerate() {
        cumulative += cf;

        if cumulative >= 0.0 {
            if year == 0 {
                return Some(0.0);
            }
            // prior < 0 here, so the year's flow cf = cumulative - prior > 0
            let fraction = -prior / cf;
            return Some((year - 1) as f64 + fraction);
        }

        prior = cumulative;
    }

    None
}
