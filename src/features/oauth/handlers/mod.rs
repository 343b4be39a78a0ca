pub mod oauth_handler;

pub use oauth_handler::get_oauth_client;
