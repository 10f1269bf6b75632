// HTTP access to the products API
pub mod client;
pub mod source;
pub mod top_products;

pub use client::{set_silent, ApiClient};
pub use source::ProductSource;
pub use top_products::fetch_top_products;
