pub mod console_logger;
pub mod file_logger;
pub mod file_storage;
pub mod html_dashboard;
pub mod memory_storage;
pub mod multi_logger;
pub mod noop_logger;
pub mod svg_canvas;

pub use console_logger::*;
pub use file_logger::*;
pub use file_storage::*;
pub use html_dashboard::*;
pub use memory_storage::*;
pub use multi_logger::*;
pub use noop_logger::*;
pub use svg_canvas::*;
