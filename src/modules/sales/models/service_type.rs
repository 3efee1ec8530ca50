use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A billable counter service and the rate the sale form pre-fills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceType {
    pub id: String,
    pub name: String,
    pub default_rate: Decimal,
}

impl ServiceType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, default_rate: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            default_rate,
        }
    }
}

/// The shop's fixed service catalog, in display order
pub fn catalog() -> Vec<ServiceType> {
    [
        ("1", "Xerox (B/W)", 2),
        ("2", "Xerox (Color)", 10),
        ("3", "Printout (B/W)", 5),
        ("4", "Printout (Color)", 15),
        ("5", "Typing", 30),
        ("6", "Lamination", 40),
        ("7", "Photo Print", 25),
        ("8", "Scanning", 10),
        ("9", "Internet Browsing", 20),
        ("10", "Other", 0),
    ]
    .into_iter()
    .map(|(id, name, rate)| ServiceType::new(id, name, Decimal::from(rate)))
    .collect()
}
