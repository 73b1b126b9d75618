pub mod create;
pub mod find_one;
pub mod remove;
pub mod schema;
pub mod update;

// Re-export handler functions for use in routing
pub use create::create;
pub use find_one::find_one;
pub use remove::remove;
pub use update::update;
