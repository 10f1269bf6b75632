use crate::models::Price;
use crate::utils::format_usd;

/// Display string for a price: dollars when numeric, verbatim text otherwise.
pub fn format_price(price: Option<&Price>) -> String {
    match price {
        None => String::new(),
        Some(p) => match p.as_number() {
            Some(n) => format_usd(n),
            None => match p {
                Price::Text(s) => s.clone(),
                Price::Number(_) => String::new(),
            },
        },
    }
}
