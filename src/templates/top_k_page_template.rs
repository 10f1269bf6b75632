use askama::Template;

/// Full page: the form plus the alert and results regions.
#[derive(Template)]
#[template(path = "top_k.html")]
pub struct TopKPageTemplate {
    pub api_hostname: String,
    /// Raw input echoed back into the form.
    pub k_value: String,
    pub alert: String,
    /// Pre-rendered (already escaped) contents of the results container.
    pub results_html: String,
}
