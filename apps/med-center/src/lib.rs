pub mod manager;

pub use manager::SchedulingManager;

pub use appointment_cell::models::{Appointment, AppointmentStatus, DoctorUtilization, Patient};
pub use doctor_cell::models::{Doctor, Slot};
pub use shared_config::AppConfig;
pub use shared_models::error::{AppError, AppResult};
