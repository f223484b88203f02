// libs/appointment-cell/src/services/metrics.rs
use std::collections::BTreeMap;

use tracing::debug;

use doctor_cell::services::{AvailabilityService, DoctorService};

use crate::models::DoctorUtilization;
use crate::services::booking::AppointmentBookingService;
use crate::services::lifecycle::AppointmentLifecycleService;

/// Ratio that is undefined for an empty denominator.
fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

pub struct AppointmentMetricsService;

impl AppointmentMetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Accepted over booked appointments for a doctor on a date; `None` when
    /// nothing was booked.
    pub fn show_rate(
        &self,
        ledger: &AppointmentBookingService,
        lifecycle: &AppointmentLifecycleService,
        doctor_id: &str,
        date: &str,
    ) -> Option<f64> {
        let (total, accepted) = ledger
            .doctor_appointments_on(doctor_id, date)
            .fold((0, 0), |(total, accepted), appointment| {
                let was_accepted = lifecycle.is_accepted(&appointment.id) as usize;
                (total + 1, accepted + was_accepted)
            });

        debug!("Show rate for doctor {} on {}: {}/{}", doctor_id, date, accepted, total);
        ratio(accepted, total)
    }

    /// Appointments over scheduled slots per doctor, counted independently for
    /// every doctor and keyed by doctor id.
    pub fn schedule_completeness(
        &self,
        doctors: &DoctorService,
        availability: &AvailabilityService,
        ledger: &AppointmentBookingService,
    ) -> BTreeMap<String, Option<f64>> {
        doctors
            .doctors()
            .iter()
            .map(|doctor| {
                let appointments = ledger.doctor_appointments(&doctor.id).count();
                let slots = availability.slot_count(&doctor.id);
                (doctor.id.clone(), ratio(appointments, slots))
            })
            .collect()
    }

    /// Utilization figures for every registered doctor, sorted by doctor id.
    pub fn utilization_report(
        &self,
        doctors: &DoctorService,
        availability: &AvailabilityService,
        ledger: &AppointmentBookingService,
        lifecycle: &AppointmentLifecycleService,
    ) -> Vec<DoctorUtilization> {
        let mut report: Vec<DoctorUtilization> = doctors
            .doctors()
            .iter()
            .map(|doctor| {
                let mut utilization = DoctorUtilization {
                    doctor_id: doctor.id.clone(),
                    slots: availability.slot_count(&doctor.id),
                    appointments: 0,
                    accepted: 0,
                    completed: 0,
                    completeness: None,
                };

                for appointment in ledger.doctor_appointments(&doctor.id) {
                    utilization.appointments += 1;
                    if lifecycle.is_accepted(&appointment.id) {
                        utilization.accepted += 1;
                    }
                    if lifecycle.is_completed(&appointment.id) {
                        utilization.completed += 1;
                    }
                }

                utilization.completeness = ratio(utilization.appointments, utilization.slots);
                utilization
            })
            .collect();

        report.sort_by(|a, b| a.doctor_id.cmp(&b.doctor_id));
        report
    }
}

impl Default for AppointmentMetricsService {
    fn default() -> Self {
        Self::new()
    }
}
