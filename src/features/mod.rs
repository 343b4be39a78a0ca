pub mod files;
pub mod oauth;
pub mod validation;
