mod common;

use axum::http::StatusCode;

use topk::api::{fetch_top_products, ApiClient, ProductSource};
use topk::error::{FetchError, FETCH_FALLBACK_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
use topk::models::Price;
use topk::render::RenderState;
use topk::viewer::resolve_submission;

use common::{spawn_json_upstream, spawn_upstream};

#[tokio::test]
async fn test_fetch_sends_k_and_decodes_products() {
    let upstream = spawn_json_upstream(
        StatusCode::OK,
        r#"{"products":[{"id":1,"name":"Vanilla Ice Cream","price":3.5},{"id":2,"name":"mint","price":"4.25"}]}"#,
    )
    .await;

    let products = fetch_top_products(&upstream.client(), 5).await.unwrap();

    assert_eq!(*upstream.requests.lock().unwrap(), vec!["k=5".to_string()]);
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].price, Some(Price::Number(3.5)));
    assert_eq!(products[1].price, Some(Price::Text("4.25".into())));
}

#[tokio::test]
async fn test_missing_products_field_is_empty_list() {
    let upstream = spawn_json_upstream(StatusCode::OK, "{}").await;
    let products = upstream.client().top_products(3).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_server_error_carries_payload_message() {
    let upstream = spawn_json_upstream(StatusCode::BAD_REQUEST, r#"{"error":"k must be a positive integer"}"#).await;

    let err = fetch_top_products(&upstream.client(), 1).await.unwrap_err();
    match &err {
        FetchError::Server { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message.as_deref(), Some("k must be a positive integer"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "k must be a positive integer");
}

#[tokio::test]
async fn test_server_error_without_message_falls_back() {
    let upstream = spawn_json_upstream(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"boom"}"#).await;
    let err = fetch_top_products(&upstream.client(), 1).await.unwrap_err();
    assert!(matches!(err, FetchError::Server { status: 500, message: None }));
    assert_eq!(err.user_message(), FETCH_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_non_json_error_page_is_unexpected() {
    let upstream = spawn_upstream(StatusCode::BAD_GATEWAY, "text/html", "<h1>Bad Gateway</h1>").await;
    let err = fetch_top_products(&upstream.client(), 1).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    assert_eq!(err.user_message(), UNEXPECTED_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    topk::api::set_silent(true);
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let err = fetch_top_products(&client, 1).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_end_to_end_submission() {
    let upstream = spawn_json_upstream(
        StatusCode::OK,
        r#"{"products":[{"id":1,"name":"vanilla ice cream","price":3.5}]}"#,
    )
    .await;
    let client = upstream.client();

    let state = resolve_submission(&client, "5").await;
    let rows = state.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].name, "Vanilla Ice Cream");
    assert_eq!(rows[0].price, "$3.50");

    let state = resolve_submission(&client, "-2").await;
    assert!(matches!(state, RenderState::Error(_)));
    assert_eq!(upstream.request_count(), 1);
}
