// handlers/v1/mod.rs - version one of the API, mounted under /v1

pub mod auth;
pub mod products;
