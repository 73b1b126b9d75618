pub mod response;
pub mod shell;

pub use response::{ApiResponse, ApiResult, Envelope, Removed};
