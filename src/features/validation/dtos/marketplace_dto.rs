use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::validation::schema::RequestSchema;
use crate::shared::constants::MAX_AD_DURATION_DAYS;
use crate::shared::sanitize::{clean_field, clean_optional_field};
use crate::shared::validation::HTTP_URL_REGEX;

/// Request DTO for listing a marketplace product
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequestDto {
    #[validate(
        required(message = "Title is required"),
        length(min = 3, max = 150, message = "Title must be 3-150 characters")
    )]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(
        required(message = "Price is required"),
        range(exclusive_min = 0.0, message = "Price must be greater than zero")
    )]
    pub price: Option<f64>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: Option<i64>,

    /// Category slug as shown in the marketplace category bar
    #[validate(
        required(message = "Category is required"),
        length(min = 1, max = 50, message = "Category must be 1-50 characters")
    )]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category: String,
}

impl RequestSchema for CreateProductRequestDto {
    type Output = ProductPayload;

    fn sanitize(&mut self) {
        clean_field(&mut self.title);
        clean_optional_field(&mut self.description);
        clean_field(&mut self.category);
        if let Some(category) = self.category.as_mut() {
            *category = category.to_lowercase();
        }
    }

    fn into_output(self) -> ProductPayload {
        ProductPayload {
            title: self.title.unwrap_or_default(),
            description: self.description,
            price: self.price.unwrap_or_default(),
            stock: self.stock.unwrap_or(1),
            category: self.category.unwrap_or_default(),
        }
    }
}

/// Request DTO for creating a paid ad campaign
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdRequestDto {
    #[validate(
        required(message = "Title is required"),
        length(min = 3, max = 100, message = "Title must be 3-100 characters")
    )]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Body must not exceed 1000 characters"))]
    pub body: Option<String>,

    /// Total campaign budget in BRL
    #[validate(
        required(message = "Budget is required"),
        range(min = 1.0, message = "Budget must be at least 1")
    )]
    pub budget: Option<f64>,

    #[validate(
        required(message = "Duration is required"),
        range(
            min = 1,
            max = MAX_AD_DURATION_DAYS,
            message = "Duration must be between 1 and 90 days"
        )
    )]
    pub duration_days: Option<i64>,

    #[validate(regex(path = *HTTP_URL_REGEX, message = "Target URL must be a valid URL"))]
    pub target_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub budget: f64,
    pub duration_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

impl RequestSchema for CreateAdRequestDto {
    type Output = AdPayload;

    fn sanitize(&mut self) {
        clean_field(&mut self.title);
        clean_optional_field(&mut self.body);
        // URLs are trimmed only, never entity-escaped
        if let Some(url) = self.target_url.as_mut() {
            *url = url.trim().to_string();
        }
        if self.target_url.as_deref().is_some_and(str::is_empty) {
            self.target_url = None;
        }
    }

    fn into_output(self) -> AdPayload {
        AdPayload {
            title: self.title.unwrap_or_default(),
            body: self.body,
            budget: self.budget.unwrap_or_default(),
            duration_days: self.duration_days.unwrap_or_default(),
            target_url: self.target_url,
        }
    }
}
