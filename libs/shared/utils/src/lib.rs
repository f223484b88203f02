pub mod datetime;
pub mod test_utils;

pub use datetime::{
    clock_time, format_clock_time, format_minute_of_day, format_time_range, minute_of_day,
    parse_clock_time, parse_date, parse_minute_of_day, parse_time_range,
};
