use crate::config::TOP_PRODUCTS_ENDPOINT;
use crate::error::FetchError;
use crate::models::{Product, TopProductsResponse};

use super::client::ApiClient;

/// Load the `k` top-ranked products, in the order the server ranked them.
///
/// The body is decoded before the status is inspected, so a non-JSON error
/// page surfaces as [`FetchError::Decode`] rather than [`FetchError::Server`].
pub async fn fetch_top_products(api: &ApiClient, k: u64) -> Result<Vec<Product>, FetchError> {
    let params = vec![("k".to_string(), k.to_string())];
    let (status, body) = api.get(TOP_PRODUCTS_ENDPOINT, &params).await?;

    let payload: TopProductsResponse =
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if !status.is_success() {
        return Err(FetchError::Server {
            status: status.as_u16(),
            message: payload.error_message(),
        });
    }
    Ok(payload.into_products())
}
