use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::features::validation::schema::RequestSchema;
use crate::shared::constants::MIN_WITHDRAWAL_AMOUNT;
use crate::shared::sanitize::clean_field;
use crate::shared::validation::{document_digits, PHONE_REGEX, RANDOM_KEY_REGEX};

/// PIX key types accepted as a withdrawal destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyType {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Random,
    /// Any value outside the list above; always rejected
    #[serde(other)]
    Unsupported,
}

impl PixKeyType {
    fn matches(self, key: &str) -> bool {
        match self {
            PixKeyType::Cpf => document_digits(key) == Some(11),
            PixKeyType::Cnpj => document_digits(key) == Some(14),
            PixKeyType::Email => key.validate_email(),
            PixKeyType::Phone => PHONE_REGEX.is_match(key),
            PixKeyType::Random => RANDOM_KEY_REGEX.is_match(key),
            PixKeyType::Unsupported => false,
        }
    }
}

impl fmt::Display for PixKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixKeyType::Cpf => "cpf",
            PixKeyType::Cnpj => "cnpj",
            PixKeyType::Email => "email",
            PixKeyType::Phone => "phone",
            PixKeyType::Random => "random",
            PixKeyType::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

fn validate_pix_key_type(key_type: &PixKeyType) -> Result<(), ValidationError> {
    if *key_type == PixKeyType::Unsupported {
        let mut error = ValidationError::new("pix_key_type");
        error.message = Some(Cow::Borrowed(
            "PIX key type must be one of: cpf, cnpj, email, phone, random",
        ));
        return Err(error);
    }
    Ok(())
}

fn validate_pix_key_format(dto: &WithdrawalRequestDto) -> Result<(), ValidationError> {
    let (Some(key_type), Some(key)) = (dto.pix_key_type, dto.pix_key.as_deref()) else {
        return Ok(());
    };
    // Unsupported types are reported by the field validator
    if key_type == PixKeyType::Unsupported {
        return Ok(());
    }

    if key_type.matches(key) {
        Ok(())
    } else {
        let mut error = ValidationError::new("pix_key_format");
        error.message = Some(Cow::Owned(format!(
            "PIX key does not match key type '{}'",
            key_type
        )));
        Err(error)
    }
}

/// Request DTO for withdrawing wallet balance to a PIX key
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_pix_key_format", skip_on_field_errors = false))]
pub struct WithdrawalRequestDto {
    /// Amount in BRL
    #[validate(
        required(message = "Amount is required"),
        range(min = MIN_WITHDRAWAL_AMOUNT, message = "Minimum withdrawal amount is 10")
    )]
    pub amount: Option<f64>,

    #[validate(
        required(message = "PIX key type is required"),
        custom(function = "validate_pix_key_type")
    )]
    pub pix_key_type: Option<PixKeyType>,

    #[validate(
        required(message = "PIX key is required"),
        length(min = 1, max = 140, message = "PIX key must be 1-140 characters")
    )]
    pub pix_key: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawalPayload {
    pub amount: f64,
    pub pix_key_type: PixKeyType,
    pub pix_key: String,
}

impl RequestSchema for WithdrawalRequestDto {
    type Output = WithdrawalPayload;

    fn sanitize(&mut self) {
        clean_field(&mut self.pix_key);
        if self.pix_key_type == Some(PixKeyType::Email) {
            if let Some(key) = self.pix_key.as_mut() {
                *key = key.to_lowercase();
            }
        }
    }

    fn into_output(self) -> WithdrawalPayload {
        WithdrawalPayload {
            amount: self.amount.unwrap_or_default(),
            pix_key_type: self.pix_key_type.unwrap_or(PixKeyType::Unsupported),
            pix_key: self.pix_key.unwrap_or_default(),
        }
    }
}
