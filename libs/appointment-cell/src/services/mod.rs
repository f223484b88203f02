pub mod booking;
pub mod lifecycle;
pub mod metrics;

pub use booking::AppointmentBookingService;
pub use lifecycle::AppointmentLifecycleService;
pub use metrics::AppointmentMetricsService;
