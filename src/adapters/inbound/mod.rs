pub mod console_commands;
pub mod websocket_source;

pub use console_commands::*;
pub use websocket_source::*;
