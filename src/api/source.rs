use std::future::Future;

use crate::error::FetchError;
use crate::models::Product;

use super::client::ApiClient;
use super::top_products::fetch_top_products;

/// Anything that can answer "give me the top `k` products".
pub trait ProductSource {
    fn top_products(&self, k: u64) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;
}

impl ProductSource for ApiClient {
    fn top_products(&self, k: u64) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send {
        fetch_top_products(self, k)
    }
}
