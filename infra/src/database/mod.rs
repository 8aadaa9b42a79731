//! Database module - PostgreSQL implementations using SQLx.

pub mod connection;
pub mod error;
pub mod postgres;

pub use connection::create_pool;
