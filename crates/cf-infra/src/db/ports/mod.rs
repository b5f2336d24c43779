mod executor;
mod mapper;

pub use executor::DbExecutor;
pub use mapper::{InsertMapper, RowMapper};
