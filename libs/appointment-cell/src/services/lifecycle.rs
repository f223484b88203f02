// libs/appointment-cell/src/services/lifecycle.rs
use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use shared_models::error::{AppError, AppResult};
use shared_utils::datetime::parse_date;

use crate::models::{Appointment, AppointmentStatus};
use crate::services::booking::AppointmentBookingService;

/// Tracks which appointments were accepted at reception and which were completed.
/// Both sets hold appointment ids and only ever grow.
pub struct AppointmentLifecycleService {
    date_format: String,
    accepted: HashSet<String>,
    completed: HashSet<String>,
}

impl AppointmentLifecycleService {
    pub fn new(date_format: &str) -> Self {
        Self {
            date_format: date_format.to_string(),
            accepted: HashSet::new(),
            completed: HashSet::new(),
        }
    }

    /// Accept the patient's earliest-booked appointment. Returns its id, or
    /// `None` when the patient has no appointment.
    pub fn accept(&mut self, ledger: &AppointmentBookingService, ssn: &str) -> Option<String> {
        debug!("Accepting patient {}", ssn);

        let Some(appointment) = ledger.first_for_patient(ssn) else {
            warn!("No appointment to accept for patient {}", ssn);
            return None;
        };

        self.accepted.insert(appointment.id.clone());
        info!("Patient {} accepted for appointment {}", ssn, appointment.id);
        Some(appointment.id.clone())
    }

    /// Earliest-dated appointment of the doctor that is accepted but not completed.
    /// Same-date appointments keep booking order.
    pub fn next_appointment(
        &self,
        ledger: &AppointmentBookingService,
        doctor_id: &str,
    ) -> Option<String> {
        let mut candidates: Vec<(Option<NaiveDate>, &Appointment)> = ledger
            .doctor_appointments(doctor_id)
            .map(|appointment| {
                (parse_date(&appointment.date, &self.date_format).ok(), appointment)
            })
            .collect();

        // Stable sort; unparsable dates go last
        candidates.sort_by_key(|(date, _)| (date.is_none(), *date));

        candidates
            .into_iter()
            .map(|(_, appointment)| appointment)
            .find(|appointment| {
                self.is_accepted(&appointment.id) && !self.is_completed(&appointment.id)
            })
            .map(|appointment| appointment.id.clone())
    }

    /// Mark the appointment completed when it exists and belongs to `doctor_id`.
    /// Anything else is a silent no-op; returns whether the appointment was marked.
    pub fn complete(
        &mut self,
        ledger: &AppointmentBookingService,
        doctor_id: &str,
        appointment_id: &str,
    ) -> bool {
        match ledger.get_appointment(appointment_id) {
            Some(appointment) if appointment.is_with(doctor_id) => {
                self.completed.insert(appointment.id.clone());
                info!("Appointment {} completed by doctor {}", appointment_id, doctor_id);
                true
            }
            _ => {
                warn!(
                    "Ignoring completion of appointment {} by doctor {}",
                    appointment_id, doctor_id
                );
                false
            }
        }
    }

    /// Strict variant of [`complete`](Self::complete): the appointment must exist,
    /// belong to the doctor, and have been accepted.
    pub fn try_complete(
        &mut self,
        ledger: &AppointmentBookingService,
        doctor_id: &str,
        appointment_id: &str,
    ) -> AppResult<()> {
        let appointment = ledger
            .get_appointment(appointment_id)
            .ok_or_else(|| AppError::AppointmentNotFound(appointment_id.to_string()))?;

        if !appointment.is_with(doctor_id) {
            return Err(AppError::WrongDoctor {
                appointment_id: appointment_id.to_string(),
                doctor_id: doctor_id.to_string(),
            });
        }

        if !self.is_accepted(appointment_id) {
            return Err(AppError::PatientNotAccepted(appointment_id.to_string()));
        }

        self.completed.insert(appointment.id.clone());
        info!("Appointment {} completed by doctor {}", appointment_id, doctor_id);
        Ok(())
    }

    pub fn is_accepted(&self, appointment_id: &str) -> bool {
        self.accepted.contains(appointment_id)
    }

    pub fn is_completed(&self, appointment_id: &str) -> bool {
        self.completed.contains(appointment_id)
    }

    /// Lifecycle position of a booked appointment; completion wins over acceptance.
    pub fn status(
        &self,
        ledger: &AppointmentBookingService,
        appointment_id: &str,
    ) -> Option<AppointmentStatus> {
        ledger.get_appointment(appointment_id)?;

        let status = if self.is_completed(appointment_id) {
            AppointmentStatus::Completed
        } else if self.is_accepted(appointment_id) {
            AppointmentStatus::Accepted
        } else {
            AppointmentStatus::Booked
        };
        Some(status)
    }
}
