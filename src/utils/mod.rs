// Utils compartidos

pub mod constants;
pub mod input;
pub mod storage;

pub use constants::*;
pub use input::parse_manual_time;
