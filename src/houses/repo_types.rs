use serde::{Deserialize, Serialize};

/// House record as persisted and seeded. Entries in `blocked_dates` use the
/// `YYYY-MM-DD` form; the list is neither deduplicated nor sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub capacity: u32,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub blocked_dates: Vec<String>,
}
