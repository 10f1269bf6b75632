pub mod app_state;
pub mod price;
pub mod product;
pub mod top_products_response;

pub use app_state::AppState;
pub use price::Price;
pub use product::Product;
pub use top_products_response::TopProductsResponse;
