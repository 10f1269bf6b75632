#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::RawQuery;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use topk::api::ApiClient;
use topk::models::{AppState, Price, Product};

/// A products API answering every `/products/top` call with a fixed reply.
pub struct StubUpstream {
    pub base_url: String,
    /// Raw query strings received, in arrival order.
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl StubUpstream {
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone()).unwrap()
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            api: self.client(),
            api_base_url: self.base_url.clone(),
            custom_css: None,
        }
    }
}

pub async fn spawn_upstream(status: StatusCode, content_type: &'static str, body: &'static str) -> StubUpstream {
    topk::api::set_silent(true);

    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();
    let app = Router::new().route(
        "/products/top",
        get(move |RawQuery(q): RawQuery| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(q.unwrap_or_default());
                (status, [(CONTENT_TYPE, content_type)], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream {
        base_url: format!("http://{}", addr),
        requests,
    }
}

pub async fn spawn_json_upstream(status: StatusCode, body: &'static str) -> StubUpstream {
    spawn_upstream(status, "application/json", body).await
}

pub fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: Some(name.to_string()),
        price: Some(Price::Number(price)),
    }
}
