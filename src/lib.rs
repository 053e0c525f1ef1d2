// Library for tests to access modules

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod retention_worker;
pub mod routes;
pub mod snapshot_store;
