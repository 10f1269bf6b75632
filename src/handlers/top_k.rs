use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;

use crate::error::RenderError;
use crate::models::AppState;
use crate::render::HtmlFragment;
use crate::templates::{TopKPageTemplate, TopKRegionsTemplate};
use crate::utils::hostname_from_url;
use crate::viewer::TopKViewer;

use super::helpers::{html_response, render_failure};

#[derive(Deserialize, Debug, Default)]
pub struct TopKQuery {
    pub k: Option<String>,
}

async fn run_submission(state: &AppState, raw: &str) -> Result<HtmlFragment, RenderError> {
    let mut viewer = TopKViewer::init(state.api.clone(), HtmlFragment::default());
    viewer.submit(raw).await?;
    Ok(viewer.into_target())
}

/// `GET /` - the form; runs a submission when `k` is present.
pub async fn top_k_page(State(state): State<AppState>, Query(q): Query<TopKQuery>) -> Response {
    let k_value = q.k.clone().unwrap_or_default();
    let fragment = match q.k {
        None => HtmlFragment::default(),
        Some(raw) => match run_submission(&state, &raw).await {
            Ok(f) => f,
            Err(e) => return render_failure(e),
        },
    };
    html_response(TopKPageTemplate {
        api_hostname: hostname_from_url(&state.api_base_url),
        k_value,
        alert: fragment.alert,
        results_html: fragment.results_html,
    })
}

/// `GET /top-k/results` - alert and results regions only.
pub async fn top_k_results(State(state): State<AppState>, Query(q): Query<TopKQuery>) -> Response {
    let raw = q.k.unwrap_or_default();
    match run_submission(&state, &raw).await {
        Ok(fragment) => html_response(TopKRegionsTemplate {
            alert: fragment.alert,
            results_html: fragment.results_html,
        }),
        Err(e) => render_failure(e),
    }
}
