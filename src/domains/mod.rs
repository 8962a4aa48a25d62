pub mod dashboard;
pub mod joystick;
pub mod logger;
pub mod path_tracking;
pub mod telemetry;

pub use dashboard::*;
pub use joystick::*;
pub use logger::*;
pub use path_tracking::*;
pub use telemetry::*;
