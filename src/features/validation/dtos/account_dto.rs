use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::validation::schema::RequestSchema;
use crate::shared::constants::MIN_PASSWORD_LENGTH;
use crate::shared::sanitize::{clean_email, clean_field, clean_optional_field};
use crate::shared::validation::USERNAME_REGEX;

/// Request DTO for user registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Password is required"),
        length(
            min = MIN_PASSWORD_LENGTH,
            message = "Password must be at least 8 characters"
        )
    )]
    pub password: Option<String>,

    #[validate(
        required(message = "Username is required"),
        length(min = 3, max = 30, message = "Username must be 3-30 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username may only contain letters, numbers and underscores"
        )
    )]
    pub username: Option<String>,

    #[validate(length(max = 100, message = "Full name must not exceed 100 characters"))]
    pub full_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterPayload {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl RequestSchema for RegisterRequestDto {
    type Output = RegisterPayload;

    fn sanitize(&mut self) {
        clean_email(&mut self.email);
        clean_field(&mut self.username);
        clean_optional_field(&mut self.full_name);
    }

    fn into_output(self) -> RegisterPayload {
        RegisterPayload {
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            full_name: self.full_name,
        }
    }
}

/// Request DTO for user login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Password is required"),
        length(min = 1, message = "Password is required")
    )]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginPayload {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl RequestSchema for LoginRequestDto {
    type Output = LoginPayload;

    fn sanitize(&mut self) {
        clean_email(&mut self.email);
    }

    fn into_output(self) -> LoginPayload {
        LoginPayload {
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}
