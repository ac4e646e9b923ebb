use jiff::civil::{Date, Time};
use jiff::{Timestamp, tz};

/// Format a timestamp for display in the user's local timezone.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    let zoned = timestamp.to_zoned(tz::TimeZone::system());
    zoned.strftime("%a, %d %b %Y %H:%M").to_string()
}

/// Format a civil date for display.
pub fn format_date(date: Date) -> String {
    date.strftime("%d %b %Y").to_string()
}

/// Format a civil time of day without seconds.
pub fn format_time(time: Time) -> String {
    time.strftime("%H:%M").to_string()
}

/// Month name for a 1-based month number, for earnings tables.
pub fn month_name(month: i8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil;

    #[test]
    fn date_and_time_formatting() {
        let date = civil::date(2026, 3, 14);
        assert_eq!(format_date(date), "14 Mar 2026");

        let time = civil::time(9, 5, 0, 0);
        assert_eq!(format_time(time), "09:05");
    }

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }
}
