use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::validation::schema::RequestSchema;
use crate::shared::sanitize::{clean_field, clean_optional_field};

/// Request DTO for a new feed or group post
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequestDto {
    #[validate(
        required(message = "Content is required"),
        length(min = 1, max = 5000, message = "Content must be 1-5000 characters")
    )]
    pub content: Option<String>,

    #[validate(length(max = 200, message = "Location must not exceed 200 characters"))]
    pub location: Option<String>,

    /// Group the post belongs to; absent for the personal feed
    #[validate(length(max = 64, message = "Group ID must not exceed 64 characters"))]
    pub group_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostPayload {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl RequestSchema for CreatePostRequestDto {
    type Output = PostPayload;

    fn sanitize(&mut self) {
        clean_field(&mut self.content);
        clean_optional_field(&mut self.location);
        clean_optional_field(&mut self.group_id);
    }

    fn into_output(self) -> PostPayload {
        PostPayload {
            content: self.content.unwrap_or_default(),
            location: self.location,
            group_id: self.group_id,
        }
    }
}
