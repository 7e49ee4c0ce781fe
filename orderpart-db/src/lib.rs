pub mod pool;
pub mod db;
pub mod sql;
pub mod model;
pub mod partition;
pub mod repository;

pub use pool::{
    DatabasePool,
    PoolStatus,
    initialize_dbpool,
};

pub use db::{
    initialize_db,
};

pub use model::{
    NewUserOrder,
    UserOrder,
};

pub use partition::{
    PartitionManager,
    PgPartitionManager,
};

pub use repository::{
    PgUserOrderRepository,
    UserOrderRepository,
};
