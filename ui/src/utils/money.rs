use rust_decimal::Decimal;

/// Format an amount in Nepalese rupees with two decimal places.
pub fn format_price(amount: &Decimal) -> String {
    format!("Rs. {:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(&dec!(1500)), "Rs. 1500.00");
        assert_eq!(format_price(&dec!(99.5)), "Rs. 99.50");
        assert_eq!(format_price(&dec!(0)), "Rs. 0.00");
    }
}
