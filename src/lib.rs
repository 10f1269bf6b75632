//! Fetch the top-k ranked products from a shop API and render them as a
//! table, from the command line or a small web page.
pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod templates;
pub mod utils;
pub mod viewer;
