// handlers/mod.rs - HTTP handlers grouped by API version
//
// /health lives outside the versioned tree; everything else is under /v1.

pub mod health;
pub mod v1;

pub use health::health;
