use serde::Deserialize;

use crate::houses::repo_types::House;

/// Payload for creating a house; the id is assigned by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHouse {
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub capacity: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub blocked_dates: Vec<String>,
}

impl NewHouse {
    pub(crate) fn into_house(self, id: i64) -> House {
        House {
            id,
            name: self.name,
            description: self.description,
            long_description: self.long_description,
            capacity: self.capacity,
            images: self.images,
            amenities: self.amenities,
            blocked_dates: self.blocked_dates,
        }
    }
}
