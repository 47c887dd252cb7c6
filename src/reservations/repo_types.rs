use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Rejected,
}

/// Reservation record. House and user references are not validated against
/// their collections, and `house_name` is a denormalized copy that can
/// drift from the house it points at. Check-in and check-out stay free-form
/// `YYYY-MM-DD` strings with no ordering check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub house_id: i64,
    pub house_name: String,
    pub user_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    #[serde(default)]
    pub message: String,
    pub status: ReservationStatus,
}
