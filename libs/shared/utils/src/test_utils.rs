use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared_config::AppConfig;

pub const TEST_DATE: &str = "06/01/2023";
pub const TEST_NEXT_DATE: &str = "06/02/2023";
pub const CARDIOLOGY: &str = "Cardiology";
pub const DERMATOLOGY: &str = "Dermatology";

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once per test binary, filtered by `RUST_LOG`.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            ))
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

pub struct TestConfig {
    pub slot_label_prefix: String,
    pub first_appointment_id: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            slot_label_prefix: "slot-".to_string(),
            first_appointment_id: 0,
        }
    }
}

impl TestConfig {
    pub fn starting_at(first_appointment_id: u64) -> Self {
        Self {
            first_appointment_id,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            slot_label_prefix: self.slot_label_prefix.clone(),
            first_appointment_id: self.first_appointment_id,
            ..AppConfig::default()
        }
    }
}
