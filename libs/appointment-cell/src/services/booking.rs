// libs/appointment-cell/src/services/booking.rs
use std::collections::HashMap;

use tracing::{debug, info, warn};

use doctor_cell::services::{AvailabilityService, DoctorService};
use shared_config::AppConfig;
use shared_models::error::{AppError, AppResult};

use crate::models::{Appointment, BookAppointmentRequest, Patient};

/// The appointment ledger. Appointments keep booking order; ids come from a
/// per-instance counter and are never reused.
pub struct AppointmentBookingService {
    next_appointment_id: u64,
    time_format: String,
    appointments: Vec<Appointment>,
    appointment_index: HashMap<String, usize>,
    patients: HashMap<String, Patient>,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            next_appointment_id: config.first_appointment_id,
            time_format: config.time_format.clone(),
            appointments: Vec::new(),
            appointment_index: HashMap::new(),
            patients: HashMap::new(),
        }
    }

    /// Book a patient into an existing slot of a doctor's schedule.
    pub fn book_appointment(
        &mut self,
        doctors: &DoctorService,
        availability: &AvailabilityService,
        request: BookAppointmentRequest,
    ) -> AppResult<String> {
        info!(
            "Booking appointment for patient {} with doctor {} on {}",
            request.patient_ssn, request.doctor_id, request.date
        );

        // **Step 1: Doctor must be registered**
        let doctor = doctors.get_doctor(&request.doctor_id).ok_or_else(|| {
            warn!("Booking rejected, unknown doctor {}", request.doctor_id);
            AppError::UnknownDoctor(request.doctor_id.clone())
        })?;

        // **Step 2: Some doctor of that speciality must have slots on record**
        let listing =
            availability.find_slots(&request.date, doctors.specialists(&doctor.specialty));
        if listing.is_empty() {
            warn!("Booking rejected, no {} slots on record", doctor.specialty);
            return Err(AppError::NoSlotsForDateSpeciality {
                date: request.date,
                speciality: doctor.specialty.clone(),
            });
        }

        // **Step 3: Resolve the slot on the requested date**
        let slot = availability
            .find_slot(&doctor.id, &request.date, &request.slot)
            .ok_or_else(|| {
                warn!(
                    "Booking rejected, slot {} not found for doctor {} on {}",
                    request.slot, request.doctor_id, request.date
                );
                AppError::SlotNotFound {
                    doctor_id: request.doctor_id.clone(),
                    date: request.date.clone(),
                    slot: request.slot.clone(),
                }
            })?
            .clone();

        // **Step 4: Record the appointment**
        let patient = self.register_patient(
            request.patient_ssn,
            request.patient_first_name,
            request.patient_last_name,
        );
        let appointment_id = self.allocate_id();

        let position = self.appointments.len();
        self.appointment_index.insert(appointment_id.clone(), position);
        self.appointments.push(Appointment {
            id: appointment_id.clone(),
            doctor_id: doctor.id.clone(),
            patient,
            date: request.date,
            slot,
        });

        info!("Appointment {} booked successfully with doctor {}", appointment_id, doctor.id);
        Ok(appointment_id)
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_appointment_id;
        self.next_appointment_id += 1;
        id.to_string()
    }

    /// First booking for an SSN registers the patient; later bookings reuse it.
    fn register_patient(&mut self, ssn: String, first_name: String, last_name: String) -> Patient {
        let patient = self.patients.entry(ssn.clone()).or_insert_with(|| {
            debug!("Registering patient {}", ssn);
            Patient {
                ssn,
                first_name,
                last_name,
            }
        });
        patient.clone()
    }

    pub fn get_appointment(&self, appointment_id: &str) -> Option<&Appointment> {
        self.appointment_index
            .get(appointment_id)
            .map(|&position| &self.appointments[position])
    }

    /// `"start-end"` range of the appointment's slot.
    pub fn appointment_time(&self, appointment_id: &str) -> Option<String> {
        self.get_appointment(appointment_id)
            .map(|appointment| appointment.slot.time_range(&self.time_format))
    }

    pub fn get_patient(&self, ssn: &str) -> Option<&Patient> {
        self.patients.get(ssn)
    }

    /// Every appointment in booking order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn doctor_appointments<'a>(
        &'a self,
        doctor_id: &'a str,
    ) -> impl Iterator<Item = &'a Appointment> + 'a {
        self.appointments
            .iter()
            .filter(move |appointment| appointment.is_with(doctor_id))
    }

    pub fn doctor_appointments_on<'a>(
        &'a self,
        doctor_id: &'a str,
        date: &'a str,
    ) -> impl Iterator<Item = &'a Appointment> + 'a {
        self.doctor_appointments(doctor_id)
            .filter(move |appointment| appointment.is_on(date))
    }

    /// `"start=ssn"` entries for the doctor's appointments on `date`, in booking order.
    pub fn list_appointments(&self, doctor_id: &str, date: &str) -> Vec<String> {
        self.doctor_appointments_on(doctor_id, date)
            .map(|appointment| {
                format!(
                    "{}={}",
                    appointment.slot.start_time.format(&self.time_format),
                    appointment.patient_ssn()
                )
            })
            .collect()
    }

    pub fn count_on(&self, date: &str) -> usize {
        self.appointments
            .iter()
            .filter(|appointment| appointment.is_on(date))
            .count()
    }

    /// Earliest-booked appointment of the patient.
    pub fn first_for_patient(&self, ssn: &str) -> Option<&Appointment> {
        self.appointments
            .iter()
            .find(|appointment| appointment.patient_ssn() == ssn)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
