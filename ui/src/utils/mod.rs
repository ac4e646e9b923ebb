pub mod csv;
pub mod earnings;
pub mod money;
pub mod time;

pub use money::format_price;
pub use time::{format_date, format_time, format_timestamp};
