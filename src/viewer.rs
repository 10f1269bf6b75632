//! The top-k viewer: validate the requested `k`, fetch once, render.
use tracing::{debug, warn};

use crate::api::ProductSource;
use crate::error::{InvalidK, RenderError};
use crate::render::{RenderState, RenderTarget};
use crate::utils::parse_positive_int;

/// Validate the raw form value for `k`.
pub fn parse_k(raw: &str) -> Result<u64, InvalidK> {
    parse_positive_int(raw).ok_or_else(|| InvalidK { raw: raw.to_string() })
}

/// Run one submission against `source` and return the resulting state.
///
/// Invalid input never reaches the source; a valid `k` issues exactly one
/// request.
pub async fn resolve_submission<S: ProductSource>(source: &S, raw: &str) -> RenderState {
    let k = match parse_k(raw) {
        Ok(k) => k,
        Err(e) => {
            debug!(raw = %e.raw, "rejected k");
            return RenderState::Error(e.to_string());
        }
    };

    debug!(k, "fetching top products");
    match source.top_products(k).await {
        Ok(products) => {
            debug!(k, count = products.len(), "top products received");
            RenderState::from_products(&products)
        }
        Err(e) => {
            warn!(k, error = %e, "failed to fetch top products");
            RenderState::Error(e.user_message())
        }
    }
}

/// Binds a product source to a render target.
pub struct TopKViewer<S, T> {
    source: S,
    target: T,
    state: RenderState,
}

impl<S: ProductSource, T: RenderTarget> TopKViewer<S, T> {
    pub fn init(source: S, target: T) -> Self {
        Self {
            source,
            target,
            state: RenderState::Empty,
        }
    }

    /// Handle one form submission. The target is cleared first and then
    /// receives the new state in full.
    pub async fn submit(&mut self, raw: &str) -> Result<&RenderState, RenderError> {
        self.target.clear();
        self.state = RenderState::Empty;

        let state = resolve_submission(&self.source, raw).await;
        self.target.render(&state)?;
        self.state = state;
        Ok(&self.state)
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}
