// Library for tests to access modules

pub mod collector;
pub mod config;
pub mod models;
pub mod prom_repo;
pub mod queries;
pub mod sqlgen;
pub mod version;
pub mod wide_csv;
pub mod window;
