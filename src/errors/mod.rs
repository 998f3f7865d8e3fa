pub mod errors;

pub use errors::{ErrorResponse, ServiceError, ServiceResult};
