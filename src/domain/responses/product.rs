use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer-facing view: storage internals (filename, path, alt text) stay
/// hidden, the image URLs are derived.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Unit price in cents.
    pub price: i64,
    pub stock: i32,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ProductResponse {
    pub fn from_model(value: Product, base_url: &str) -> Self {
        let image_url = value.full_image_url(base_url);
        let thumbnail_url = value.thumbnail_url(base_url);

        ProductResponse {
            id: value.product_id,
            name: value.name,
            description: value.description,
            price: value.price,
            stock: value.stock,
            image_url,
            thumbnail_url,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

/// Admin view exposing every stored field.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductAdminResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i32,
    pub image_url: Option<String>,
    pub image_filename: Option<String>,
    pub image_path: Option<String>,
    pub image_alt: Option<String>,
    pub image_thumbnail: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Product> for ProductAdminResponse {
    fn from(value: Product) -> Self {
        ProductAdminResponse {
            id: value.product_id,
            name: value.name,
            description: value.description,
            price: value.price,
            stock: value.stock,
            image_url: value.image_url,
            image_filename: value.image_filename,
            image_path: value.image_path,
            image_alt: value.image_alt,
            image_thumbnail: value.image_thumbnail,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
