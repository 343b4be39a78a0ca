use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            errors,
        }
    }
}

/// Body of a 400 response produced by schema validation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorBody {
    /// Always "Validation Error"
    #[schema(example = "Validation Error")]
    pub error: String,
    /// One human-readable message per violated constraint
    pub details: Vec<String>,
}

impl ValidationErrorBody {
    pub const ERROR: &'static str = "Validation Error";

    pub fn new(details: Vec<String>) -> Self {
        Self {
            error: Self::ERROR.to_string(),
            details,
        }
    }
}
