use serde::{Deserialize, Serialize};

/// Price as delivered by the endpoint. Most servers send a JSON number, but
/// decimal columns are frequently serialized as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    /// Numeric value, if the price is (or spells) a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Price::Number(n) if n.is_finite() => Some(*n),
            Price::Number(_) => None,
            Price::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    return None;
                }
                t.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }
}
