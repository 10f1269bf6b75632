use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "";
pub const FALLBACK_API_BASE_URL: &str = "http://localhost:5000";

/// Path of the ranked-products endpoint, relative to the API base URL.
pub const TOP_PRODUCTS_ENDPOINT: &str = "/products/top";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

/// Resolve the API base URL, preferring an explicit override (e.g. `--api-base-url`).
pub fn resolve_api_base_url(override_url: Option<&str>) -> String {
    match override_url {
        Some(u) if !u.trim().is_empty() => sanitize_base_url(u),
        _ => get_api_base_url(),
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        FALLBACK_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
