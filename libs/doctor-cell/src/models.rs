use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use shared_utils::datetime::{format_time_range, minute_of_day, parse_time_range};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One bookable chunk of a doctor's day. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub label: String,
    pub date: String,
    pub start_time: NaiveTime,
    /// Wraps to `00:00` for a slot that closes at end of day.
    pub end_time: NaiveTime,
    pub duration_minutes: u32,
}

impl Slot {
    pub fn time_range(&self, time_format: &str) -> String {
        format_time_range(self.start_time, self.duration_minutes, time_format)
    }

    /// Minute-of-day bounds; the end may be 1440.
    pub fn minute_bounds(&self) -> (i64, i64) {
        let start = minute_of_day(self.start_time);
        (start, start + i64::from(self.duration_minutes))
    }

    /// A booking may name a slot by label (`slot-0`) or by its time range
    /// (`09:00-09:30`, `9:00-9:30`).
    pub fn matches_reference(&self, reference: &str, time_format: &str) -> bool {
        if self.label == reference {
            return true;
        }
        parse_time_range(reference, time_format)
            .map(|bounds| bounds == self.minute_bounds())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyScheduleRequest {
    pub doctor_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u32,
}
