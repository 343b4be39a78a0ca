mod oauth_dto;

pub use oauth_dto::OAuthClientDto;
