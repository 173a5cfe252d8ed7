use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog row. `price` is the unit price in integer cents.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i32,
    pub image_url: Option<String>,
    pub image_filename: Option<String>,
    pub image_path: Option<String>,
    pub image_alt: Option<String>,
    pub image_thumbnail: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Product {
    /// Uploaded image takes precedence over the externally linked one.
    pub fn full_image_url(&self, base_url: &str) -> Option<String> {
        match (&self.image_path, &self.image_filename) {
            (Some(path), Some(filename)) => Some(format!("{base_url}/{path}/{filename}")),
            _ => self.image_url.clone(),
        }
    }

    pub fn thumbnail_url(&self, base_url: &str) -> Option<String> {
        match (&self.image_path, &self.image_thumbnail) {
            (Some(path), Some(thumbnail)) => Some(format!("{base_url}/{path}/{thumbnail}")),
            _ => self.full_image_url(base_url),
        }
    }
}
