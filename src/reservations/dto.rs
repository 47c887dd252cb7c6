use serde::Deserialize;

use crate::reservations::repo_types::{Reservation, ReservationStatus};

/// Payload for submitting a stay request. Id and status are assigned by the
/// service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
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
}

impl NewReservation {
    pub(crate) fn into_reservation(self, id: i64) -> Reservation {
        Reservation {
            id,
            house_id: self.house_id,
            house_name: self.house_name,
            user_id: self.user_id,
            guest_name: self.guest_name,
            guest_email: self.guest_email,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            message: self.message,
            status: ReservationStatus::Pending,
        }
    }
}
