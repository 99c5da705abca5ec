mod pool;
pub mod repos;
mod schema;

pub use pool::*;
pub use repos::DbError;
pub use schema::ensure_schema;
