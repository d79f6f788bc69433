//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod plan_trip;
pub mod render_itinerary;

pub use manage_config::ConfigService;
pub use plan_trip::{PlanSummary, PlanTripService};
