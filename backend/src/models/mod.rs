pub mod appointment;
pub mod catalog;
pub mod schedule;
pub mod time;

pub use appointment::*;
pub use catalog::*;
pub use schedule::*;
pub use time::*;
