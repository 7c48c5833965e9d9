pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod openapi;
pub mod routes;
