// Library exports for testing
pub mod datalayer;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;
