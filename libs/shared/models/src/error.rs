use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Failures raised by write-path operations. Read-path lookups report a miss
/// with `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Duplicate doctor id: {0}")]
    DuplicateId(String),

    #[error("Unknown speciality: {0}")]
    UnknownSpeciality(String),

    #[error("Unknown doctor: {0}")]
    UnknownDoctor(String),

    #[error("No {speciality} slots on record (requested date {date})")]
    NoSlotsForDateSpeciality { date: String, speciality: String },

    #[error("Slot {slot} not found for doctor {doctor_id} on {date}")]
    SlotNotFound {
        doctor_id: String,
        date: String,
        slot: String,
    },

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid slot duration: {0} minutes")]
    InvalidDuration(u32),

    #[error("Appointment not found: {0}")]
    AppointmentNotFound(String),

    #[error("Appointment {appointment_id} is not with doctor {doctor_id}")]
    WrongDoctor {
        appointment_id: String,
        doctor_id: String,
    },

    #[error("Patient for appointment {0} has not been accepted")]
    PatientNotAccepted(String),
}
