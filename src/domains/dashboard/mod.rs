pub mod canvas;
mod ports;
pub mod view;

pub use canvas::*;
pub use ports::*;
pub use view::*;
