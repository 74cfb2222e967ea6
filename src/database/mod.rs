pub mod connection;
pub mod documents;
pub mod setup;
pub mod store;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use store::load_app_data;
