pub mod lenient;
pub mod log;
pub mod stats;

pub use log::*;
pub use stats::*;
