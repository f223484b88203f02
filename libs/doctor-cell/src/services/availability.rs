use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, warn};

use shared_config::AppConfig;
use shared_models::error::{AppError, AppResult};
use shared_utils::datetime::{clock_time, parse_date, parse_minute_of_day};

use crate::models::{DailyScheduleRequest, Slot};

/// Per-doctor slot schedules, each kept in generation order.
pub struct AvailabilityService {
    config: AppConfig,
    schedules: HashMap<String, Vec<Slot>>,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
            schedules: HashMap::new(),
        }
    }

    /// Split `start..end` into `duration_minutes` chunks and append them to the
    /// doctor's schedule. A trailing remainder shorter than one chunk is dropped.
    ///
    /// Returns the doctor's cumulative slot count across every date.
    pub fn create_daily_slots(&mut self, request: DailyScheduleRequest) -> AppResult<usize> {
        debug!(
            "Generating slots for doctor {} on {} ({}-{}, {} min)",
            request.doctor_id,
            request.date,
            request.start_time,
            request.end_time,
            request.duration_minutes
        );

        if request.duration_minutes == 0 {
            return Err(AppError::InvalidDuration(request.duration_minutes));
        }

        let time_format = self.config.time_format.as_str();
        parse_date(&request.date, &self.config.date_format)?;
        let start = parse_minute_of_day(&request.start_time, time_format)?;
        let end = parse_minute_of_day(&request.end_time, time_format)?;

        let total_minutes = end - start;
        if total_minutes <= 0 {
            warn!(
                "Schedule for doctor {} on {} has an empty range {}-{}",
                request.doctor_id, request.date, request.start_time, request.end_time
            );
        }
        let step = i64::from(request.duration_minutes);
        let slot_count = (total_minutes.max(0) / step) as usize;

        let schedule = self.schedules.entry(request.doctor_id.clone()).or_default();

        let mut slot_start = start;
        for index in 0..slot_count {
            let slot_end = slot_start + step;
            schedule.push(Slot {
                label: self.config.slot_label(index),
                date: request.date.clone(),
                start_time: clock_time(slot_start),
                end_time: clock_time(slot_end),
                duration_minutes: request.duration_minutes,
            });
            slot_start = slot_end;
        }

        info!(
            "Added {} slots for doctor {} on {} ({} total)",
            slot_count,
            request.doctor_id,
            request.date,
            schedule.len()
        );
        Ok(schedule.len())
    }

    /// Every slot of the doctor across all dates.
    pub fn schedule(&self, doctor_id: &str) -> &[Slot] {
        self.schedules
            .get(doctor_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn slot_count(&self, doctor_id: &str) -> usize {
        self.schedule(doctor_id).len()
    }

    pub fn has_slots(&self, doctor_id: &str) -> bool {
        !self.schedule(doctor_id).is_empty()
    }

    pub fn slots_on<'a>(
        &'a self,
        doctor_id: &str,
        date: &'a str,
    ) -> impl Iterator<Item = &'a Slot> + 'a {
        self.schedule(doctor_id)
            .iter()
            .filter(move |slot| slot.date == date)
    }

    /// First slot on `date` named by `reference`, either its label or its time range.
    pub fn find_slot(&self, doctor_id: &str, date: &str, reference: &str) -> Option<&Slot> {
        let time_format = self.config.time_format.as_str();
        self.schedule(doctor_id)
            .iter()
            .find(|slot| slot.date == date && slot.matches_reference(reference, time_format))
    }

    /// Slot listing for the given doctors on `date`, keyed and sorted by doctor id.
    ///
    /// A doctor appears only when their schedule holds at least one slot on any
    /// date; the value lists that doctor's `"start-end"` ranges on `date`, which
    /// may be empty.
    pub fn find_slots<'a, I>(&self, date: &str, doctor_ids: I) -> BTreeMap<String, Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let time_format = self.config.time_format.as_str();
        let mut found = BTreeMap::new();

        for doctor_id in doctor_ids {
            if !self.has_slots(doctor_id) {
                continue;
            }

            let ranges = self
                .slots_on(doctor_id, date)
                .map(|slot| slot.time_range(time_format))
                .collect();
            found.insert(doctor_id.to_string(), ranges);
        }

        debug!("Found slot listings for {} doctors on {}", found.len(), date);
        found
    }
}
