use payloads::responses::MonthlyEarnings;
use rust_decimal::Decimal;

/// Derived figures for the earnings dashboard. All computed client-side
/// from the monthly table the backend returns.
#[derive(Debug, Clone, PartialEq)]
pub struct EarningsSummary {
    pub total_gross: Decimal,
    pub total_net: Decimal,
    pub total_bookings: u32,
    /// (year, month) of the month with the highest net earnings.
    pub best_month: Option<(i16, i8)>,
    /// Net change from the second-latest to the latest month, when both
    /// exist.
    pub latest_delta: Option<Decimal>,
}

/// Summarize a monthly earnings table. Rows are expected in
/// chronological order, oldest first, as the backend returns them.
pub fn summarize(monthly: &[MonthlyEarnings]) -> EarningsSummary {
    let total_gross = monthly.iter().map(|m| m.gross).sum();
    let total_net = monthly.iter().map(|m| m.net).sum();
    let total_bookings = monthly.iter().map(|m| m.bookings_count).sum();

    let best_month = monthly
        .iter()
        .max_by_key(|m| m.net)
        .map(|m| (m.year, m.month));

    let latest_delta = match monthly {
        [.., previous, latest] => Some(latest.net - previous.net),
        _ => None,
    };

    EarningsSummary {
        total_gross,
        total_net,
        total_bookings,
        best_month,
        latest_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn month(
        year: i16,
        month_num: i8,
        gross: Decimal,
        net: Decimal,
        bookings_count: u32,
    ) -> MonthlyEarnings {
        MonthlyEarnings {
            year,
            month: month_num,
            gross,
            net,
            bookings_count,
        }
    }

    #[test]
    fn summary_totals_and_best_month() {
        let monthly = vec![
            month(2026, 6, dec!(5000), dec!(4500), 4),
            month(2026, 7, dec!(12500), dec!(11250), 9),
            month(2026, 8, dec!(8000), dec!(7200), 5),
        ];

        let summary = summarize(&monthly);
        assert_eq!(summary.total_gross, dec!(25500));
        assert_eq!(summary.total_net, dec!(22950));
        assert_eq!(summary.total_bookings, 18);
        assert_eq!(summary.best_month, Some((2026, 7)));
        assert_eq!(summary.latest_delta, Some(dec!(-4050)));
    }

    #[test]
    fn empty_table_produces_zeroes() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_gross, Decimal::ZERO);
        assert_eq!(summary.total_net, Decimal::ZERO);
        assert_eq!(summary.total_bookings, 0);
        assert_eq!(summary.best_month, None);
        assert_eq!(summary.latest_delta, None);
    }

    #[test]
    fn single_month_has_no_delta() {
        let monthly = vec![month(2026, 8, dec!(100), dec!(90), 1)];
        let summary = summarize(&monthly);
        assert_eq!(summary.best_month, Some((2026, 8)));
        assert_eq!(summary.latest_delta, None);
    }
}
