use std::env;
use tracing::warn;

pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
pub const DEFAULT_SLOT_LABEL_PREFIX: &str = "slot-";
pub const DEFAULT_FIRST_APPOINTMENT_ID: u64 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub date_format: String,
    pub time_format: String,
    pub slot_label_prefix: String,
    pub first_appointment_id: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            slot_label_prefix: DEFAULT_SLOT_LABEL_PREFIX.to_string(),
            first_appointment_id: DEFAULT_FIRST_APPOINTMENT_ID,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; missing or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                warn!("{} not set, using default", key);
                default.to_string()
            })
        };

        let config = Self {
            date_format: text("MED_DATE_FORMAT", DEFAULT_DATE_FORMAT),
            time_format: text("MED_TIME_FORMAT", DEFAULT_TIME_FORMAT),
            slot_label_prefix: text("MED_SLOT_LABEL_PREFIX", DEFAULT_SLOT_LABEL_PREFIX),
            first_appointment_id: match lookup("MED_FIRST_APPOINTMENT_ID") {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    warn!("MED_FIRST_APPOINTMENT_ID is not a number ({}), using default", raw);
                    DEFAULT_FIRST_APPOINTMENT_ID
                }),
                None => {
                    warn!("MED_FIRST_APPOINTMENT_ID not set, using default");
                    DEFAULT_FIRST_APPOINTMENT_ID
                }
            },
        };

        if !config.is_configured() {
            warn!("Scheduling not fully configured - empty format or label prefix");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.date_format.is_empty()
            && !self.time_format.is_empty()
            && !self.slot_label_prefix.is_empty()
    }

    /// Label of the `index`-th slot of a generation batch, e.g. `slot-0`.
    pub fn slot_label(&self, index: usize) -> String {
        format!("{}{}", self.slot_label_prefix, index)
    }
}
