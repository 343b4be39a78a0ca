use axum::{extract::Path, Json};
use tracing::debug;

use crate::core::error::Result;
use crate::core::extractor::JsonBody;
use crate::features::validation::schema::{SchemaName, ValidatedPayload};
use crate::shared::types::{ApiResponse, ValidationErrorBody};

/// Validate a request body against a named schema
///
/// Returns the sanitized, normalized payload. Available schemas:
/// `register`, `login`, `create-post`, `create-product`, `create-ad`,
/// `withdrawal`.
#[utoipa::path(
    post,
    path = "/api/validate/{schema}",
    tag = "validation",
    params(
        ("schema" = String, Path, description = "Schema name, e.g. `register` or `withdrawal`")
    ),
    request_body(
        content = serde_json::Value,
        description = "Raw request body for the selected schema",
    ),
    responses(
        (status = 200, description = "Payload is valid", body = ApiResponse<ValidatedPayload>),
        (status = 400, description = "One message per violated constraint", body = ValidationErrorBody),
        (status = 404, description = "Unknown schema")
    )
)]
pub async fn validate_request(
    Path(schema): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<ApiResponse<ValidatedPayload>>> {
    let schema: SchemaName = schema.parse()?;
    debug!("Validating request body against schema '{}'", schema);

    let payload = schema.validate(body)?;

    Ok(Json(ApiResponse::success(Some(payload), None)))
}

#[cfg(test)]
mod tests {
    use crate::features::validation::routes;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        TestServer::new(routes::routes()).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_body_returns_every_violation() {
        let response = server()
            .post("/api/validate/register")
            .json(&json!({ "email": "nope", "username": "ab" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "error": "Validation Error",
            "details": [
                "Invalid email format",
                "Password is required",
                "Username must be 3-30 characters"
            ]
        }));
    }

    #[tokio::test]
    async fn test_valid_body_returns_normalized_payload() {
        let response = server()
            .post("/api/validate/create-post")
            .json(&json!({
                "content": "<script>x()</script>New drop this friday",
                "group_id": "   ",
                "likes": 1000
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"],
            json!({
                "schema": "create-post",
                "payload": { "content": "New drop this friday" }
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_schema_is_not_found() {
        let response = server()
            .post("/api/validate/transfer-everything")
            .json(&json!({}))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let response = server()
            .post("/api/validate/login")
            .content_type("application/json")
            .text("{ not json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Validation Error");
        assert_eq!(body["details"].as_array().map(Vec::len), Some(1));
    }
}
