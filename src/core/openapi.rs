use utoipa::{Modify, OpenApi};

use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::features::oauth::{dtos as oauth_dtos, handlers as oauth_handlers};
use crate::features::validation::{
    dtos as validation_dtos, handlers as validation_handlers, schema::ValidatedPayload,
};
use crate::shared::types::{ApiResponse, ValidationErrorBody};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Validation
        validation_handlers::validation_handler::validate_request,
        // Files
        files_handlers::file_handler::upload_file,
        files_handlers::file_handler::delete_file_by_url,
        // Auth
        oauth_handlers::oauth_handler::get_oauth_client,
    ),
    components(
        schemas(
            // Shared
            ValidationErrorBody,
            // Validation
            validation_dtos::RegisterRequestDto,
            validation_dtos::RegisterPayload,
            validation_dtos::LoginRequestDto,
            validation_dtos::LoginPayload,
            validation_dtos::CreatePostRequestDto,
            validation_dtos::PostPayload,
            validation_dtos::CreateProductRequestDto,
            validation_dtos::ProductPayload,
            validation_dtos::CreateAdRequestDto,
            validation_dtos::AdPayload,
            validation_dtos::PixKeyType,
            validation_dtos::WithdrawalRequestDto,
            validation_dtos::WithdrawalPayload,
            ValidatedPayload,
            ApiResponse<ValidatedPayload>,
            // Files
            files_dtos::UploadFileDto,
            files_dtos::UploadResponseDto,
            files_dtos::DeleteFileByUrlDto,
            files_dtos::DeleteFileResponseDto,
            ApiResponse<files_dtos::UploadResponseDto>,
            ApiResponse<files_dtos::DeleteFileResponseDto>,
            // Auth
            oauth_dtos::OAuthClientDto,
            ApiResponse<oauth_dtos::OAuthClientDto>,
        )
    ),
    tags(
        (name = "validation", description = "Request body validation against named schemas"),
        (name = "files", description = "Object storage uploads and deletes"),
        (name = "auth", description = "OAuth client settings"),
    ),
    info(
        title = "Flux Platform API",
        version = "0.1.0",
        description = "Validation, object storage and OAuth settings for the Flux platform"
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
