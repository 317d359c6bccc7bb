pub mod seed;
pub mod sqlite;

pub use seed::seed;
pub use sqlite::{create_pool, migrate};
