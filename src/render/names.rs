/// Known catalogue names, keyed by their lowercase form.
const PRODUCT_TITLES: &[(&str, &str)] = &[
    ("vanilla ice cream", "Vanilla Ice Cream"),
    ("chocolate ice cream", "Chocolate Ice Cream"),
    ("strawberry ice cream", "Strawberry Ice Cream"),
    ("6-pack of paycheck pilsners", "6-Pack of Paycheck Pilsners"),
    ("seven fabergé easter eggs", "Seven Fabergé Easter Eggs"),
    ("painting - the storm on the sea of galilee", "Painting: The Storm on the Sea of Galilee"),
];

/// Title-cased display name for a product.
///
/// Names found in the catalogue title table (case-insensitively) are replaced
/// by their display title; anything else is returned as sent.
pub fn display_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    let normalized = name.to_lowercase();
    PRODUCT_TITLES
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, title)| title.to_string())
        .unwrap_or_else(|| name.to_string())
}
