pub mod setting;
pub mod dbconfig;
pub mod schedconfig;

pub use setting::Settings;
pub use dbconfig::{ConnectionConfig, DbConfig, PartitionConfig, PoolConfig};
pub use schedconfig::SchedulerConfig;
