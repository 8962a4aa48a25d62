pub mod aggregate;
pub mod filter;
mod ports;
pub mod renderer;

pub use aggregate::*;
pub use filter::*;
pub use ports::*;
pub use renderer::*;
