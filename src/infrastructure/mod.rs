//! Infrastructure layer - HTTP, configuration and export

pub mod api;
pub mod config;
pub mod export;
pub mod workspace;

pub use api::{HttpPlannerApi, PlannerApi};
pub use config::Config;
pub use export::HtmlDocument;
pub use workspace::{ConfigRepository, Workspace};
