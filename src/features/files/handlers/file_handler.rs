use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::ValidatedJson;
use crate::features::files::dtos::{
    is_mime_type_allowed, DeleteFileByUrlDto, DeleteFileResponseDto, UploadFileDto,
    UploadFolderDto, UploadResponseDto,
};
use crate::features::validation::schema::collect_messages;
use crate::modules::storage::{StorageGateway, UploadFile};
use crate::shared::constants::{ALLOWED_MIME_TYPES, DEFAULT_UPLOAD_FOLDER, MAX_FILE_SIZE};
use crate::shared::types::{ApiResponse, ValidationErrorBody};

/// Upload a file
///
/// Accepts multipart/form-data with:
/// - `file`: The file to upload (optional; without it nothing is stored)
/// - `folder`: Target folder label (optional, defaults to "uploads")
#[utoipa::path(
    post,
    path = "/api/files/upload",
    tag = "files",
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
        description = "File upload form with optional folder label",
    ),
    responses(
        (status = 201, description = "File uploaded successfully", body = ApiResponse<UploadResponseDto>),
        (status = 200, description = "No file supplied, nothing stored", body = ApiResponse<UploadResponseDto>),
        (status = 400, description = "Invalid file or folder", body = ValidationErrorBody),
        (status = 500, description = "Upload failed")
    )
)]
pub async fn upload_file(
    State(gateway): State<Arc<StorageGateway>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponseDto>>), AppError> {
    let mut file: Option<UploadFile> = None;
    let mut folder = DEFAULT_UPLOAD_FOLDER.to_string();

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let original_name = field.file_name().map(|s| s.to_string()).unwrap_or_default();

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                // Browsers send an empty, unnamed part for an untouched file input
                if data.is_empty() && original_name.is_empty() {
                    continue;
                }

                file = Some(UploadFile {
                    data: data.to_vec(),
                    original_name,
                    content_type,
                });
            }
            "folder" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read folder field: {}", e))
                })?;
                let text = text.trim();
                if !text.is_empty() {
                    folder = text.to_string();
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    UploadFolderDto {
        folder: folder.clone(),
    }
    .validate()
    .map_err(|e| AppError::Validation(collect_messages(&e)))?;

    if let Some(file) = &file {
        check_file(file)?;
    }

    let metadata = file.as_ref().map(|f| {
        (
            f.original_name.clone(),
            f.content_type.clone(),
            f.data.len() as i64,
        )
    });

    let url = gateway.upload(file, &folder).await?;

    let status = if url.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let (original_filename, content_type, file_size) = match metadata {
        Some((name, content_type, size)) => (Some(name), Some(content_type), Some(size)),
        None => (None, None, None),
    };
    let message = url.is_none().then(|| "No file supplied".to_string());

    Ok((
        status,
        Json(ApiResponse::success(
            Some(UploadResponseDto {
                url,
                original_filename,
                content_type,
                file_size,
                uploaded_at: Utc::now(),
            }),
            message,
        )),
    ))
}

fn check_file(file: &UploadFile) -> Result<(), AppError> {
    let mut violations = Vec::new();

    if file.data.len() > MAX_FILE_SIZE {
        violations.push(format!(
            "File too large. Maximum size is {} bytes ({} MB)",
            MAX_FILE_SIZE,
            MAX_FILE_SIZE / 1024 / 1024
        ));
    }

    if !is_mime_type_allowed(&file.content_type) {
        violations.push(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            file.content_type,
            ALLOWED_MIME_TYPES.join(", ")
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations))
    }
}

/// Delete a file by its URL
///
/// Best-effort: storage failures are logged and reported as `deleted: false`,
/// never as an error.
#[utoipa::path(
    delete,
    path = "/api/files",
    tag = "files",
    request_body = DeleteFileByUrlDto,
    responses(
        (status = 200, description = "Delete attempted", body = ApiResponse<DeleteFileResponseDto>),
        (status = 400, description = "Invalid URL", body = ValidationErrorBody)
    )
)]
pub async fn delete_file_by_url(
    State(gateway): State<Arc<StorageGateway>>,
    ValidatedJson(url): ValidatedJson<DeleteFileByUrlDto>,
) -> Json<ApiResponse<DeleteFileResponseDto>> {
    let deleted = gateway.delete(&url).await;

    let message = if deleted {
        "File deleted successfully"
    } else {
        "File could not be deleted"
    };

    Json(ApiResponse::success(
        Some(DeleteFileResponseDto { deleted }),
        Some(message.to_string()),
    ))
}
