pub mod file_handler;

pub use file_handler::{delete_file_by_url, upload_file};
