//! Database connection pool module.
//!
//! Provides async PostgreSQL connection pooling using diesel_async with bb8.

mod pool;

pub use pool::{
    AsyncDbPool, MIGRATIONS, count_pending_migrations, establish_async_connection_pool,
    revert_migrations, run_pending_migrations,
};
