use askama::Template;

/// Only the alert and results regions, for embedding in other pages.
#[derive(Template)]
#[template(path = "partials/top_k_regions.html")]
pub struct TopKRegionsTemplate {
    pub alert: String,
    pub results_html: String,
}
