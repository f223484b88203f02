use chrono::{NaiveDate, NaiveTime, Timelike};

use shared_models::error::{AppError, AppResult};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Closing time of a schedule that runs to midnight.
pub const END_OF_DAY: &str = "24:00";

pub fn parse_date(value: &str, format: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), format)
        .map_err(|_| AppError::InvalidDate(value.to_string()))
}

pub fn parse_clock_time(value: &str, format: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), format)
        .map_err(|_| AppError::InvalidTime(value.to_string()))
}

/// Minutes since midnight, `0..=1440`. `24:00` is the only reading of 1440.
pub fn parse_minute_of_day(value: &str, format: &str) -> AppResult<i64> {
    if value.trim() == END_OF_DAY {
        return Ok(MINUTES_PER_DAY);
    }
    parse_clock_time(value, format).map(minute_of_day)
}

/// Parse a `"start-end"` range into minute-of-day bounds.
pub fn parse_time_range(value: &str, format: &str) -> AppResult<(i64, i64)> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| AppError::InvalidTime(value.to_string()))?;
    Ok((
        parse_minute_of_day(start, format)?,
        parse_minute_of_day(end, format)?,
    ))
}

pub fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight() / 60)
}

/// Clock reading for a minute-of-day offset. End of day wraps to midnight.
pub fn clock_time(minute: i64) -> NaiveTime {
    let seconds = minute.rem_euclid(MINUTES_PER_DAY) * 60;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0).unwrap_or_default()
}

pub fn format_clock_time(time: NaiveTime, format: &str) -> String {
    time.format(format).to_string()
}

pub fn format_minute_of_day(minute: i64, format: &str) -> String {
    if minute >= MINUTES_PER_DAY {
        return END_OF_DAY.to_string();
    }
    format_clock_time(clock_time(minute), format)
}

/// `"09:00-09:30"` style range used by slot listings and appointment times.
pub fn format_time_range(start: NaiveTime, duration_minutes: u32, format: &str) -> String {
    let start = minute_of_day(start);
    let end = start + i64::from(duration_minutes);
    format!(
        "{}-{}",
        format_minute_of_day(start, format),
        format_minute_of_day(end, format)
    )
}
