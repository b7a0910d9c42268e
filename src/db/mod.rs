pub mod migrations;
pub mod pool;

pub use pool::{create_in_memory_pool, create_pool, DbPool};
