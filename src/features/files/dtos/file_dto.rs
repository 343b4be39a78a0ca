use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::validation::schema::RequestSchema;
use crate::shared::constants::ALLOWED_MIME_TYPES;
use crate::shared::validation::{FOLDER_REGEX, HTTP_URL_REGEX};

/// Upload file request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// The file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: Option<String>,
    /// Target folder, e.g. "avatars" or "marketplace/items" (defaults to "uploads")
    #[schema(example = "avatars")]
    pub folder: Option<String>,
}

/// Folder label received alongside an upload
#[derive(Debug, Validate)]
pub struct UploadFolderDto {
    #[validate(
        length(min = 1, max = 100, message = "Folder must be 1-100 characters"),
        regex(
            path = *FOLDER_REGEX,
            message = "Folder may only contain letters, numbers, '-', '_' and '/' separators"
        )
    )]
    pub folder: String,
}

/// Response DTO for uploads
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    /// URL of the stored file; null when the request carried no file
    pub url: Option<String>,
    /// Original filename as uploaded
    pub original_filename: Option<String>,
    /// MIME type of the file
    pub content_type: Option<String>,
    /// Size of the file in bytes
    pub file_size: Option<i64>,
    pub uploaded_at: DateTime<Utc>,
}

/// Request DTO for deleting a file by URL
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteFileByUrlDto {
    /// The URL returned by the upload endpoint
    #[validate(
        required(message = "url is required"),
        length(max = 2048, message = "url must not exceed 2048 characters"),
        regex(path = *HTTP_URL_REGEX, message = "Invalid URL format")
    )]
    pub url: Option<String>,
}

impl RequestSchema for DeleteFileByUrlDto {
    type Output = String;

    fn sanitize(&mut self) {
        if let Some(url) = self.url.as_mut() {
            *url = url.trim().to_string();
        }
    }

    fn into_output(self) -> String {
        self.url.unwrap_or_default()
    }
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteFileResponseDto {
    /// Whether the storage provider confirmed the delete
    pub deleted: bool,
}

/// Check if a MIME type is allowed
pub fn is_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&content_type)
}
