// libs/appointment-cell/tests/lifecycle_test.rs

mod common;

use assert_matches::assert_matches;

use appointment_cell::models::AppointmentStatus;
use common::TestSetup;
use shared_models::error::AppError;
use shared_utils::test_utils::{CARDIOLOGY, TEST_DATE, TEST_NEXT_DATE};

fn two_day_setup() -> TestSetup {
    let mut setup = TestSetup::new();
    setup.add_doctor("D1", CARDIOLOGY);
    setup.add_doctor("D2", CARDIOLOGY);
    setup.add_schedule("D1", TEST_DATE, "09:00", "11:00", 30);
    setup.add_schedule("D1", TEST_NEXT_DATE, "09:00", "11:00", 30);
    setup.add_schedule("D2", TEST_DATE, "09:00", "11:00", 30);
    setup
}

#[test]
fn test_accept_then_complete_flow() {
    let mut setup = two_day_setup();
    let id = setup.book("S1", "D1", TEST_DATE, "slot-0").unwrap();

    assert_eq!(setup.next_appointment("D1"), None);

    assert_eq!(setup.accept("S1"), Some(id.clone()));
    assert_eq!(setup.next_appointment("D1"), Some(id.clone()));

    assert!(setup.complete("D1", &id));
    assert_eq!(setup.next_appointment("D1"), None);
}

#[test]
fn test_accept_unknown_patient_is_noop() {
    let mut setup = two_day_setup();
    setup.book("S1", "D1", TEST_DATE, "slot-0").unwrap();

    assert_eq!(setup.accept("S9"), None);
    assert_eq!(setup.next_appointment("D1"), None);
}

#[test]
fn test_accept_picks_first_booking_of_patient() {
    let mut setup = two_day_setup();
    let later = setup.book("S1", "D1", TEST_NEXT_DATE, "slot-0").unwrap();
    let earlier = setup.book("S1", "D1", TEST_DATE, "slot-0").unwrap();

    // Booking order wins over date order
    assert_eq!(setup.accept("S1"), Some(later.clone()));
    // Accepting again selects the same appointment
    assert_eq!(setup.accept("S1"), Some(later.clone()));

    assert!(setup.lifecycle.is_accepted(&later));
    assert!(!setup.lifecycle.is_accepted(&earlier));
}

#[test]
fn test_next_appointment_orders_by_date() {
    let mut setup = two_day_setup();
    let next_day = setup.book("S1", "D1", TEST_NEXT_DATE, "slot-0").unwrap();
    let first_day = setup.book("S2", "D1", TEST_DATE, "slot-1").unwrap();
    setup.accept("S1");
    setup.accept("S2");

    assert_eq!(setup.next_appointment("D1"), Some(first_day.clone()));
    setup.complete("D1", &first_day);
    assert_eq!(setup.next_appointment("D1"), Some(next_day));
}

#[test]
fn test_next_appointment_compares_years() {
    let mut setup = TestSetup::new();
    setup.add_doctor("D1", CARDIOLOGY);
    setup.add_schedule("D1", "01/15/2024", "09:00", "10:00", 30);
    setup.add_schedule("D1", "12/31/2023", "09:00", "10:00", 30);

    setup.book("S1", "D1", "01/15/2024", "slot-0").unwrap();
    let december = setup.book("S2", "D1", "12/31/2023", "slot-0").unwrap();
    setup.accept("S1");
    setup.accept("S2");

    assert_eq!(setup.next_appointment("D1"), Some(december));
}

#[test]
fn test_same_date_keeps_booking_order() {
    let mut setup = two_day_setup();
    let first = setup.book("S1", "D1", TEST_DATE, "slot-3").unwrap();
    setup.book("S2", "D1", TEST_DATE, "slot-0").unwrap();
    setup.accept("S2");
    setup.accept("S1");

    assert_eq!(setup.next_appointment("D1"), Some(first));
}

#[test]
fn test_next_appointment_is_per_doctor() {
    let mut setup = two_day_setup();
    let id = setup.book("S1", "D2", TEST_DATE, "slot-0").unwrap();
    setup.accept("S1");

    assert_eq!(setup.next_appointment("D1"), None);
    assert_eq!(setup.next_appointment("D2"), Some(id));
}

#[test]
fn test_complete_mismatch_is_silent() {
    let mut setup = two_day_setup();
    let id = setup.book("S1", "D1", TEST_DATE, "slot-0").unwrap();
    setup.accept("S1");

    assert!(!setup.complete("D2", &id));
    assert!(!setup.complete("D1", "999"));
    assert_eq!(setup.next_appointment("D1"), Some(id));
}

#[test]
fn test_complete_without_accept_hides_appointment() {
    let mut setup = two_day_setup();
    let id = setup.book("S1", "D1", TEST_DATE, "slot-0").unwrap();

    assert!(setup.complete("D1", &id));
    setup.accept("S1");

    assert_eq!(setup.next_appointment("D1"), None);
    assert_eq!(setup.lifecycle.status(&setup.booking, &id), Some(AppointmentStatus::Completed));
}

#[test]
fn test_try_complete_checks() {
    let mut setup = two_day_setup();
    let id = setup.book("S1", "D1", TEST_DATE, "slot-0").unwrap();

    assert_matches!(
        setup.lifecycle.try_complete(&setup.booking, "D1", "999"),
        Err(AppError::AppointmentNotFound(missing)) if missing == "999"
    );
    assert_matches!(
        setup.lifecycle.try_complete(&setup.booking, "D2", &id),
        Err(AppError::WrongDoctor { doctor_id, .. }) if doctor_id == "D2"
    );
    assert_matches!(
        setup.lifecycle.try_complete(&setup.booking, "D1", &id),
        Err(AppError::PatientNotAccepted(_))
    );

    setup.accept("S1");
    assert_matches!(setup.lifecycle.try_complete(&setup.booking, "D1", &id), Ok(()));
    assert!(setup.lifecycle.is_completed(&id));
}

#[test]
fn test_status_progression() {
    let mut setup = two_day_setup();
    let id = setup.book("S1", "D1", TEST_DATE, "slot-0").unwrap();

    assert_eq!(setup.lifecycle.status(&setup.booking, &id), Some(AppointmentStatus::Booked));
    setup.accept("S1");
    assert_eq!(setup.lifecycle.status(&setup.booking, &id), Some(AppointmentStatus::Accepted));
    setup.complete("D1", &id);
    assert_eq!(setup.lifecycle.status(&setup.booking, &id), Some(AppointmentStatus::Completed));

    assert_eq!(setup.lifecycle.status(&setup.booking, "999"), None);
}

#[test]
fn test_status_serializes_snake_case() {
    assert_eq!(serde_json::to_value(AppointmentStatus::Accepted).unwrap(), "accepted");
    assert_eq!(AppointmentStatus::Completed.to_string(), "completed");
}
