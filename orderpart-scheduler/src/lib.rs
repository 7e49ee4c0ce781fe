pub mod clock;
pub mod months;
pub mod sample;
pub mod startup;
pub mod monthly;

#[cfg(test)]
mod testing;

pub use clock::{Clock, SystemClock};
pub use monthly::PartitionScheduler;
pub use startup::{StartupReport, StartupRunner};
