//! Request schemas
//!
//! A schema is a DTO whose fields are all optional at the serde layer, so a
//! body missing several required fields still deserializes and every
//! violation can be reported at once. Validation runs on the sanitized DTO;
//! only a valid DTO is converted into its normalized output type.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::core::error::{AppError, Result};
use crate::features::validation::dtos::{
    AdPayload, CreateAdRequestDto, CreatePostRequestDto, CreateProductRequestDto, LoginPayload,
    LoginRequestDto, PostPayload, ProductPayload, RegisterPayload, RegisterRequestDto,
    WithdrawalPayload, WithdrawalRequestDto,
};

pub trait RequestSchema: DeserializeOwned + Validate {
    /// Normalized value handed to the handler
    type Output;

    /// Strip markup and normalize string fields in place
    fn sanitize(&mut self);

    /// Convert a validated DTO; required fields are guaranteed present
    fn into_output(self) -> Self::Output;
}

/// Deserialize, sanitize and validate `body` against schema `S`
pub fn validate_payload<S: RequestSchema>(body: Value) -> Result<S::Output> {
    let mut dto: S = serde_json::from_value(body)
        .map_err(|e| AppError::validation(format!("Invalid request body: {}", e)))?;

    dto.sanitize();

    dto.validate()
        .map_err(|errors| AppError::Validation(collect_messages(&errors)))?;

    Ok(dto.into_output())
}

/// One message per violated constraint, ordered by field name
pub fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid ({})", field, error.code),
            })
        })
        .collect()
}

/// Schemas addressable by name from `/api/validate/{schema}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaName {
    Register,
    Login,
    CreatePost,
    CreateProduct,
    CreateAd,
    Withdrawal,
}

impl SchemaName {
    pub const ALL: [SchemaName; 6] = [
        SchemaName::Register,
        SchemaName::Login,
        SchemaName::CreatePost,
        SchemaName::CreateProduct,
        SchemaName::CreateAd,
        SchemaName::Withdrawal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaName::Register => "register",
            SchemaName::Login => "login",
            SchemaName::CreatePost => "create-post",
            SchemaName::CreateProduct => "create-product",
            SchemaName::CreateAd => "create-ad",
            SchemaName::Withdrawal => "withdrawal",
        }
    }

    pub fn validate(self, body: Value) -> Result<ValidatedPayload> {
        match self {
            SchemaName::Register => {
                validate_payload::<RegisterRequestDto>(body).map(ValidatedPayload::Register)
            }
            SchemaName::Login => {
                validate_payload::<LoginRequestDto>(body).map(ValidatedPayload::Login)
            }
            SchemaName::CreatePost => {
                validate_payload::<CreatePostRequestDto>(body).map(ValidatedPayload::CreatePost)
            }
            SchemaName::CreateProduct => validate_payload::<CreateProductRequestDto>(body)
                .map(ValidatedPayload::CreateProduct),
            SchemaName::CreateAd => {
                validate_payload::<CreateAdRequestDto>(body).map(ValidatedPayload::CreateAd)
            }
            SchemaName::Withdrawal => {
                validate_payload::<WithdrawalRequestDto>(body).map(ValidatedPayload::Withdrawal)
            }
        }
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaName {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self> {
        SchemaName::ALL
            .into_iter()
            .find(|schema| schema.as_str() == name)
            .ok_or_else(|| AppError::NotFound(format!("Unknown schema '{}'", name)))
    }
}

/// Normalized payload tagged with the schema that produced it
#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "schema", content = "payload", rename_all = "kebab-case")]
pub enum ValidatedPayload {
    Register(RegisterPayload),
    Login(LoginPayload),
    CreatePost(PostPayload),
    CreateProduct(ProductPayload),
    CreateAd(AdPayload),
    Withdrawal(WithdrawalPayload),
}
