use reqwest::Url;

/// `host[:port]` of a URL, or an empty string when it doesn't parse.
pub fn hostname_from_url(u: &str) -> String {
    let Ok(url) = Url::parse(u.trim()) else {
        return String::new();
    };
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}
