#![allow(dead_code)]

use appointment_cell::models::BookAppointmentRequest;
use appointment_cell::services::{
    AppointmentBookingService, AppointmentLifecycleService, AppointmentMetricsService,
};
use doctor_cell::models::{CreateDoctorRequest, DailyScheduleRequest};
use doctor_cell::services::{AvailabilityService, DoctorService};
use shared_config::AppConfig;
use shared_models::error::AppResult;
use shared_utils::test_utils::{init_test_tracing, TestConfig, CARDIOLOGY, DERMATOLOGY};

/// Every appointment-cell service wired over one doctor registry.
pub struct TestSetup {
    pub doctors: DoctorService,
    pub availability: AvailabilityService,
    pub booking: AppointmentBookingService,
    pub lifecycle: AppointmentLifecycleService,
    pub metrics: AppointmentMetricsService,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with_config(TestConfig::default().to_app_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        init_test_tracing();

        let mut doctors = DoctorService::new();
        doctors.add_specialties([CARDIOLOGY, DERMATOLOGY]);

        Self {
            doctors,
            availability: AvailabilityService::new(&config),
            booking: AppointmentBookingService::new(&config),
            lifecycle: AppointmentLifecycleService::new(&config.date_format),
            metrics: AppointmentMetricsService::new(),
        }
    }

    pub fn add_doctor(&mut self, id: &str, specialty: &str) {
        self.doctors
            .create_doctor(CreateDoctorRequest {
                id: id.to_string(),
                first_name: format!("{}-name", id),
                last_name: format!("{}-surname", id),
                specialty: specialty.to_string(),
            })
            .unwrap();
    }

    pub fn add_schedule(
        &mut self,
        doctor_id: &str,
        date: &str,
        start: &str,
        end: &str,
        duration: u32,
    ) -> usize {
        self.availability
            .create_daily_slots(DailyScheduleRequest {
                doctor_id: doctor_id.to_string(),
                date: date.to_string(),
                start_time: start.to_string(),
                end_time: end.to_string(),
                duration_minutes: duration,
            })
            .unwrap()
    }

    pub fn book(
        &mut self,
        ssn: &str,
        doctor_id: &str,
        date: &str,
        slot: &str,
    ) -> AppResult<String> {
        self.booking.book_appointment(
            &self.doctors,
            &self.availability,
            BookAppointmentRequest {
                patient_ssn: ssn.to_string(),
                patient_first_name: format!("{}-name", ssn),
                patient_last_name: format!("{}-surname", ssn),
                doctor_id: doctor_id.to_string(),
                date: date.to_string(),
                slot: slot.to_string(),
            },
        )
    }

    pub fn accept(&mut self, ssn: &str) -> Option<String> {
        self.lifecycle.accept(&self.booking, ssn)
    }

    pub fn complete(&mut self, doctor_id: &str, appointment_id: &str) -> bool {
        self.lifecycle.complete(&self.booking, doctor_id, appointment_id)
    }

    pub fn next_appointment(&self, doctor_id: &str) -> Option<String> {
        self.lifecycle.next_appointment(&self.booking, doctor_id)
    }
}
