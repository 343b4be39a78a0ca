pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod schema;

pub use routes::routes;
