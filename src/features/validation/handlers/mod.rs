pub mod validation_handler;

pub use validation_handler::validate_request;
