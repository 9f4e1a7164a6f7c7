pub mod config;
pub mod telemetry;
pub mod workflows;

pub use config::{AppConfig, AppEnvironment, DraftPolicy};
pub use workflows::profile;
