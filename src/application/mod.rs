pub mod dashboard_actor;
pub mod dashboard_service;
pub mod telemetry_source;

pub use dashboard_actor::*;
pub use dashboard_service::*;
pub use telemetry_source::*;
