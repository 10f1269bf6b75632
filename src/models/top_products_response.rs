use serde::Deserialize;
use serde_json::Value;

use crate::models::product::Product;

/// Body of `GET /products/top`: `{"products": [...]}` on success,
/// `{"error": "..."}` alongside a non-2xx status otherwise.
#[derive(Debug, Default, Deserialize)]
pub struct TopProductsResponse {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl TopProductsResponse {
    /// The server's error message, when it sent a non-empty string.
    pub fn error_message(&self) -> Option<String> {
        self.error
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products.unwrap_or_default()
    }
}
