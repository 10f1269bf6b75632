use crate::api::ApiClient;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub api_base_url: String,
    pub custom_css: Option<String>,
}
