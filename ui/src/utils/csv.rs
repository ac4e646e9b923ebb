use payloads::responses::MonthlyEarnings;

use super::time::month_name;

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the monthly earnings table as CSV for download.
pub fn earnings_csv(monthly: &[MonthlyEarnings]) -> String {
    let mut out = String::from("Month,Year,Bookings,Gross,Net\r\n");
    for row in monthly {
        out.push_str(&format!(
            "{},{},{},{},{}\r\n",
            escape(month_name(row.month)),
            row.year,
            row.bookings_count,
            row.gross,
            row.net,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn earnings_table_renders_as_csv() {
        let monthly = vec![
            MonthlyEarnings {
                year: 2026,
                month: 7,
                gross: dec!(12500.00),
                net: dec!(11250.00),
                bookings_count: 9,
            },
            MonthlyEarnings {
                year: 2026,
                month: 8,
                gross: dec!(8000.00),
                net: dec!(7200.00),
                bookings_count: 5,
            },
        ];

        let csv = earnings_csv(&monthly);
        assert_eq!(
            csv,
            "Month,Year,Bookings,Gross,Net\r\n\
             July,2026,9,12500.00,11250.00\r\n\
             August,2026,5,8000.00,7200.00\r\n"
        );
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
