pub mod indicator;
pub mod status;

pub use indicator::*;
pub use status::*;
