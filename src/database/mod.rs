pub mod models;
pub mod statements;
pub mod store;

pub use models::{NewProduct, Product, ProductChanges};
pub use statements::Statement;
pub use store::{ProductStore, StoreError, StoreSession};
