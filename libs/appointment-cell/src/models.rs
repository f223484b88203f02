// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use doctor_cell::models::Slot;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// Patients are keyed by SSN and registered on their first booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub ssn: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub patient: Patient,
    pub date: String,
    pub slot: Slot,
}

impl Appointment {
    pub fn patient_ssn(&self) -> &str {
        &self.patient.ssn
    }

    pub fn is_with(&self, doctor_id: &str) -> bool {
        self.doctor_id == doctor_id
    }

    pub fn is_on(&self, date: &str) -> bool {
        self.date == date
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Booked,
    Accepted,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Booked => write!(f, "booked"),
            AppointmentStatus::Accepted => write!(f, "accepted"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_ssn: String,
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub doctor_id: String,
    pub date: String,
    /// Slot label (`slot-0`) or time range (`09:00-09:30`).
    pub slot: String,
}

/// Per-doctor utilization figures; `completeness` is `None` when the doctor has no slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorUtilization {
    pub doctor_id: String,
    pub slots: usize,
    pub appointments: usize,
    pub accepted: usize,
    pub completed: usize,
    pub completeness: Option<f64>,
}
