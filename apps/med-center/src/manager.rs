use std::collections::BTreeMap;

use tracing::info;

use appointment_cell::models::{
    AppointmentStatus, BookAppointmentRequest, DoctorUtilization, Patient,
};
use appointment_cell::services::{
    AppointmentBookingService, AppointmentLifecycleService, AppointmentMetricsService,
};
use doctor_cell::models::{CreateDoctorRequest, DailyScheduleRequest, Doctor};
use doctor_cell::services::{AvailabilityService, DoctorService};
use shared_config::AppConfig;
use shared_models::error::AppResult;

/// Single owner of the medical centre's state: speciality catalog, doctor
/// registry, slot schedules, appointment ledger and lifecycle sets.
///
/// Not synchronised. Callers sharing one manager across threads must wrap the
/// whole value in a lock, since a booking reads the registry and schedules
/// while writing the ledger.
pub struct SchedulingManager {
    doctors: DoctorService,
    availability: AvailabilityService,
    booking: AppointmentBookingService,
    lifecycle: AppointmentLifecycleService,
    metrics: AppointmentMetricsService,
}

impl Default for SchedulingManager {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl SchedulingManager {
    pub fn new(config: &AppConfig) -> Self {
        info!("Starting scheduling manager (first appointment id {})", config.first_appointment_id);
        Self {
            doctors: DoctorService::new(),
            availability: AvailabilityService::new(config),
            booking: AppointmentBookingService::new(config),
            lifecycle: AppointmentLifecycleService::new(&config.date_format),
            metrics: AppointmentMetricsService::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&AppConfig::from_env())
    }

    // ==========================================================================
    // SPECIALITIES AND DOCTORS
    // ==========================================================================

    /// Add specialities, ignoring duplicates. Can be called repeatedly.
    pub fn add_specialities<I, S>(&mut self, specialities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doctors.add_specialties(specialities);
    }

    pub fn specialities(&self) -> &[String] {
        self.doctors.specialties()
    }

    /// Fails with `DuplicateId` or `UnknownSpeciality`.
    pub fn add_doctor(
        &mut self,
        id: &str,
        name: &str,
        surname: &str,
        speciality: &str,
    ) -> AppResult<()> {
        self.doctors.create_doctor(CreateDoctorRequest {
            id: id.to_string(),
            first_name: name.to_string(),
            last_name: surname.to_string(),
            specialty: speciality.to_string(),
        })?;
        Ok(())
    }

    pub fn specialists(&self, speciality: &str) -> Vec<String> {
        self.doctors
            .specialists(speciality)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn doctor(&self, code: &str) -> Option<&Doctor> {
        self.doctors.get_doctor(code)
    }

    pub fn doc_name(&self, code: &str) -> Option<&str> {
        self.doctors.first_name(code)
    }

    pub fn doc_surname(&self, code: &str) -> Option<&str> {
        self.doctors.last_name(code)
    }

    // ==========================================================================
    // SCHEDULES
    // ==========================================================================

    /// Define `duration`-minute slots between `start` and `end` (`HH:MM`) for a
    /// doctor on `date` (`MM/DD/YYYY`). Returns the doctor's total slot count
    /// over all dates.
    pub fn add_daily_schedule(
        &mut self,
        code: &str,
        date: &str,
        start: &str,
        end: &str,
        duration: u32,
    ) -> AppResult<usize> {
        self.availability.create_daily_slots(DailyScheduleRequest {
            doctor_id: code.to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            duration_minutes: duration,
        })
    }

    pub fn slot_count(&self, code: &str) -> usize {
        self.availability.slot_count(code)
    }

    /// Doctor id -> `"hh:mm-hh:mm"` slots on `date`, for every doctor of the
    /// speciality that has any slot on record. Sorted by doctor id.
    pub fn find_slots(&self, date: &str, speciality: &str) -> BTreeMap<String, Vec<String>> {
        self.availability
            .find_slots(date, self.doctors.specialists(speciality))
    }

    // ==========================================================================
    // APPOINTMENTS
    // ==========================================================================

    /// Book `slot` (label or `"hh:mm-hh:mm"`) of the doctor's schedule on `date`.
    /// Returns the new appointment id.
    pub fn set_appointment(
        &mut self,
        ssn: &str,
        name: &str,
        surname: &str,
        code: &str,
        date: &str,
        slot: &str,
    ) -> AppResult<String> {
        self.booking.book_appointment(
            &self.doctors,
            &self.availability,
            BookAppointmentRequest {
                patient_ssn: ssn.to_string(),
                patient_first_name: name.to_string(),
                patient_last_name: surname.to_string(),
                doctor_id: code.to_string(),
                date: date.to_string(),
                slot: slot.to_string(),
            },
        )
    }

    pub fn appointment_doctor(&self, id_appointment: &str) -> Option<&str> {
        self.booking
            .get_appointment(id_appointment)
            .map(|appointment| appointment.doctor_id.as_str())
    }

    pub fn appointment_patient(&self, id_appointment: &str) -> Option<&str> {
        self.booking
            .get_appointment(id_appointment)
            .map(|appointment| appointment.patient_ssn())
    }

    pub fn appointment_time(&self, id_appointment: &str) -> Option<String> {
        self.booking.appointment_time(id_appointment)
    }

    pub fn appointment_date(&self, id_appointment: &str) -> Option<&str> {
        self.booking
            .get_appointment(id_appointment)
            .map(|appointment| appointment.date.as_str())
    }

    /// `"hh:mm=SSN"` for each of the doctor's appointments on `date`, in booking order.
    pub fn list_appointments(&self, code: &str, date: &str) -> Vec<String> {
        self.booking.list_appointments(code, date)
    }

    pub fn patient_name(&self, ssn: &str) -> Option<&str> {
        self.booking.get_patient(ssn).map(|patient| patient.first_name.as_str())
    }

    pub fn patient_surname(&self, ssn: &str) -> Option<&str> {
        self.booking.get_patient(ssn).map(|patient| patient.last_name.as_str())
    }

    pub fn patient(&self, ssn: &str) -> Option<&Patient> {
        self.booking.get_patient(ssn)
    }

    // ==========================================================================
    // RECEPTION AND VISITS
    // ==========================================================================

    /// Number of appointments on `date` across all doctors. Nothing is stored.
    pub fn set_current_date(&self, date: &str) -> usize {
        self.booking.count_on(date)
    }

    /// Mark the patient's first-booked appointment as accepted at reception.
    pub fn accept(&mut self, ssn: &str) -> Option<String> {
        self.lifecycle.accept(&self.booking, ssn)
    }

    pub fn next_appointment(&self, code: &str) -> Option<String> {
        self.lifecycle.next_appointment(&self.booking, code)
    }

    /// Lenient completion: an unknown id or another doctor's appointment is ignored.
    pub fn complete_appointment(&mut self, code: &str, app_id: &str) -> bool {
        self.lifecycle.complete(&self.booking, code, app_id)
    }

    /// Completion that fails with `AppointmentNotFound`, `WrongDoctor` or
    /// `PatientNotAccepted` instead of ignoring the request.
    pub fn try_complete_appointment(&mut self, code: &str, app_id: &str) -> AppResult<()> {
        self.lifecycle.try_complete(&self.booking, code, app_id)
    }

    pub fn appointment_status(&self, id_appointment: &str) -> Option<AppointmentStatus> {
        self.lifecycle.status(&self.booking, id_appointment)
    }

    // ==========================================================================
    // METRICS
    // ==========================================================================

    pub fn show_rate(&self, code: &str, date: &str) -> Option<f64> {
        self.metrics.show_rate(&self.booking, &self.lifecycle, code, date)
    }

    pub fn schedule_completeness(&self) -> BTreeMap<String, Option<f64>> {
        self.metrics
            .schedule_completeness(&self.doctors, &self.availability, &self.booking)
    }

    pub fn utilization_report(&self) -> Vec<DoctorUtilization> {
        self.metrics.utilization_report(
            &self.doctors,
            &self.availability,
            &self.booking,
            &self.lifecycle,
        )
    }
}
