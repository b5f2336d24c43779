//! Sqlite persistence for campaign requests.
//!
//! Repositories run diesel queries through a [`DbExecutor`](ports::DbExecutor)
//! and translate rows with the mappers, so the domain never sees a row type.

pub mod executor;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod ports;
pub mod repositories;
pub mod schema;

pub use executor::DieselSqliteExecutor;
