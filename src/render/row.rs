use serde::Serialize;

use crate::models::Product;

use super::names::display_name;
use super::price::format_price;

/// One rendered table row, all cells already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        ProductRow {
            id: product.id.to_string(),
            name: display_name(product.name.as_deref().unwrap_or_default()),
            price: format_price(product.price.as_ref()),
        }
    }
}
