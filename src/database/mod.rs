mod connection;
mod memory;
mod postgres;
mod store;

pub use connection::{check_health, create_pool};
pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;
pub use store::ProductStore;
