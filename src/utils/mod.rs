// URL handling utilities
pub mod url_parser;
pub mod query_string;

// Parsing and formatting utilities
pub mod parse_int;
pub mod currency;

pub use url_parser::hostname_from_url;
pub use query_string::build_query_string;
pub use parse_int::parse_positive_int;
pub use currency::format_usd;
