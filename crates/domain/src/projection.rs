//! Stockout projection arithmetic.
//!
//! The whole computation: sum sales over the trailing window, divide by the
//! window length for a per-day rate, divide closing stock by the rate for a
//! days-to-stockout projection. Internal division runs at full f64 precision;
//! only the returned figures are rounded to display precision.

/// Sentinel for "no depletion signal available" (zero sales in the window).
///
/// A large finite value rather than infinity so it survives JSON serialization
/// unchanged. Callers must treat it as a sentinel, not a real day count.
pub const NO_DEPLETION_SIGNAL: f64 = 9999.0;

/// Stockout projection figures, already rounded to display precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Average units sold per day, rounded to 2 decimal places.
    pub sales_rate_per_day: f64,
    /// Days until stock reaches zero, rounded to 1 decimal place, or
    /// [`NO_DEPLETION_SIGNAL`].
    pub days_to_stockout: f64,
}

/// Project days-to-stockout from closing stock and the summed sale quantity
/// over a trailing window of `window_days` days.
///
/// `window_total == 0` covers both "no sales rows in the window" and the
/// degenerate non-empty window whose rows all carry zero quantity; both mean
/// no depletion signal.
pub fn project_stockout(closing_stock: i64, window_total: i64, window_days: u32) -> Projection {
    if window_total <= 0 {
        return Projection {
            sales_rate_per_day: 0.0,
            days_to_stockout: NO_DEPLETION_SIGNAL,
        };
    }

    let rate = window_total as f64 / window_days as f64;
    let days = closing_stock as f64 / rate;

    Projection {
        sales_rate_per_day: round2(rate),
        days_to_stockout: round1(days),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stock_100_sales_60_over_30_days_projects_50_days() {
        let p = project_stockout(100, 60, 30);
        assert_eq!(p.sales_rate_per_day, 2.0);
        assert_eq!(p.days_to_stockout, 50.0);
    }

    #[test]
    fn zero_window_total_yields_sentinel() {
        let p = project_stockout(10, 0, 30);
        assert_eq!(p.sales_rate_per_day, 0.0);
        assert_eq!(p.days_to_stockout, NO_DEPLETION_SIGNAL);
    }

    #[test]
    fn rate_is_rounded_to_two_decimals() {
        // 100 units over 30 days -> 3.333... -> 3.33
        let p = project_stockout(50, 100, 30);
        assert_eq!(p.sales_rate_per_day, 3.33);
    }

    #[test]
    fn days_are_rounded_to_one_decimal() {
        // rate = 81/30 = 2.7; 100 / 2.7 = 37.037... -> 37.0
        let p = project_stockout(100, 81, 30);
        assert_eq!(p.days_to_stockout, 37.0);
    }

    #[test]
    fn zero_stock_with_sales_projects_zero_days() {
        let p = project_stockout(0, 30, 30);
        assert_eq!(p.days_to_stockout, 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for positive window totals, the projection matches the
        /// defining formula at display precision.
        #[test]
        fn projection_matches_formula(
            stock in 0i64..1_000_000i64,
            total in 1i64..1_000_000i64,
        ) {
            let p = project_stockout(stock, total, 30);
            let rate = total as f64 / 30.0;
            let days = stock as f64 / rate;

            prop_assert_eq!(p.sales_rate_per_day, (rate * 100.0).round() / 100.0);
            prop_assert_eq!(p.days_to_stockout, (days * 10.0).round() / 10.0);
        }

        /// Property: the rate is never negative and never the sentinel.
        #[test]
        fn rate_is_finite_and_non_negative(
            stock in 0i64..1_000_000i64,
            total in 0i64..1_000_000i64,
        ) {
            let p = project_stockout(stock, total, 30);
            prop_assert!(p.sales_rate_per_day >= 0.0);
            prop_assert!(p.sales_rate_per_day.is_finite());
            prop_assert!(p.days_to_stockout >= 0.0);
        }
    }
}
