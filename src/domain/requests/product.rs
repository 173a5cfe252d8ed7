use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search: String::new(),
        }
    }
}

// Explicit allow-listed fields; nothing outside these ever reaches the
// database.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "Mechanical Keyboard")]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Unit price in cents.
    #[validate(range(min = 0, message = "Price must not be negative"))]
    #[schema(example = 12999)]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    #[schema(example = 25)]
    pub stock: i32,

    #[validate(url(message = "Invalid URL format"))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    /// Unit price in cents.
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: Option<i64>,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,

    #[validate(url(message = "Invalid URL format"))]
    pub image_url: Option<String>,
}
