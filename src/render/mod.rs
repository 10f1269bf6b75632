// Turning fetched products into something a person can read
pub mod html;
pub mod names;
pub mod price;
pub mod row;
pub mod state;
pub mod target;
pub mod terminal;

pub use html::HtmlFragment;
pub use names::display_name;
pub use price::format_price;
pub use row::ProductRow;
pub use state::RenderState;
pub use target::RenderTarget;
pub use terminal::{render_json, TerminalTarget};

/// Shown in place of a table when the server returned no products.
pub const NO_RESULTS_MESSAGE: &str = "No products found for this selection.";
