use crate::models::Product;

use super::row::ProductRow;

/// What the alert and results regions currently show. Each submission
/// replaces the whole state; variants never mix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Empty,
    Error(String),
    Results(Vec<ProductRow>),
}

impl RenderState {
    pub fn from_products(products: &[Product]) -> Self {
        RenderState::Results(products.iter().map(ProductRow::from).collect())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderState::Error(_))
    }

    pub fn alert_message(&self) -> Option<&str> {
        match self {
            RenderState::Error(m) => Some(m),
            _ => None,
        }
    }

    pub fn rows(&self) -> &[ProductRow] {
        match self {
            RenderState::Results(rows) => rows,
            _ => &[],
        }
    }
}
