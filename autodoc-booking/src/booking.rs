use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quote::{Quote, SlotQuote};
use crate::rates::RateCard;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

/// A confirmed booking for one slot and one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub slot_id: String,
    pub slot_number: String,
    pub vehicle_plate: String,
    pub entry_at: DateTime<Utc>,
    pub quote: Quote,
    pub status: BookingStatus,
    /// Final amount charged at exit, including any overstay. Set on
    /// completion; a cancelled booking settles at 0.
    pub settled_amount: Option<i32>,
    pub exited_at: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Booking {id} is {status:?}, only active bookings can transition")]
    NotActive { id: Uuid, status: BookingStatus },
}

impl Booking {
    /// Turn an accepted quote into an active booking record.
    pub fn confirm(
        slot_quote: SlotQuote,
        slot_number: impl Into<String>,
        vehicle_plate: impl Into<String>,
        entry_at: DateTime<Utc>,
    ) -> Self {
        let booking = Self {
            id: Uuid::new_v4(),
            slot_id: slot_quote.slot_id,
            slot_number: slot_number.into(),
            vehicle_plate: vehicle_plate.into(),
            entry_at,
            quote: slot_quote.quote,
            status: BookingStatus::Active,
            settled_amount: None,
            exited_at: None,
        };
        tracing::debug!(id = %booking.id, slot = %booking.slot_id, "booking confirmed");
        booking
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }

    /// Settle the booking at vehicle exit.
    ///
    /// The settled amount is the quoted total plus the overstay charge for
    /// any time parked beyond the quoted window.
    pub fn complete(
        &mut self,
        exited_at: DateTime<Utc>,
        rates: &RateCard,
    ) -> Result<i32, BookingError> {
        if !self.is_active() {
            return Err(BookingError::NotActive {
                id: self.id,
                status: self.status,
            });
        }

        let parked_minutes = (exited_at - self.entry_at).num_minutes().max(0) as u32;
        let overstay = rates.overstay_charge(self.quote.duration_minutes, parked_minutes);
        if overstay > 0 {
            tracing::warn!(id = %self.id, overstay, "booking completed with overstay");
        }

        let amount = self.quote.total_price + overstay;
        self.status = BookingStatus::Completed;
        self.settled_amount = Some(amount);
        self.exited_at = Some(exited_at);
        Ok(amount)
    }

    pub fn cancel(&mut self) -> Result<(), BookingError> {
        if !self.is_active() {
            return Err(BookingError::NotActive {
                id: self.id,
                status: self.status,
            });
        }
        self.status = BookingStatus::Cancelled;
        self.settled_amount = Some(0);
        Ok(())
    }
}
