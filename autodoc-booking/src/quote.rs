use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use autodoc_lot::Slot;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A priced booking window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Whole currency units per hour.
    pub hourly_rate: i32,
    pub duration_minutes: u32,
    /// Duration rounded up to whole hours; billing never pro-rates.
    pub billable_hours: u32,
    pub total_price: i32,
}

/// A quote tied to a specific slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotQuote {
    pub slot_id: String,
    pub quote: Quote,
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Hourly rate must be non-negative, got {0}")]
    InvalidRate(i32),

    #[error("Slot {0} is not available for booking")]
    SlotUnavailable(String),
}

/// Price a wall-clock booking window.
///
/// A window whose end does not come after its start wraps past midnight:
/// `22:00 -> 01:00` is three hours, and `10:00 -> 10:00` is a full 24-hour
/// booking. Partial hours always round up to the next full hour.
pub fn quote(start: NaiveTime, end: NaiveTime, hourly_rate: i32) -> Result<Quote, QuoteError> {
    if hourly_rate < 0 {
        return Err(QuoteError::InvalidRate(hourly_rate));
    }

    let raw = end.num_seconds_from_midnight() as i64 / 60
        - start.num_seconds_from_midnight() as i64 / 60;
    let duration_minutes = if raw <= 0 {
        (raw + MINUTES_PER_DAY as i64) as u32
    } else {
        raw as u32
    };

    let billable_hours = duration_minutes.div_ceil(60);
    Ok(Quote {
        start,
        end,
        hourly_rate,
        duration_minutes,
        billable_hours,
        total_price: billable_hours as i32 * hourly_rate,
    })
}

impl Quote {
    /// Quote a window against a slot's own hourly price. Slots the board
    /// would refuse to select cannot be quoted either.
    pub fn for_slot(slot: &Slot, start: NaiveTime, end: NaiveTime) -> Result<SlotQuote, QuoteError> {
        if !slot.is_selectable() {
            return Err(QuoteError::SlotUnavailable(slot.id.clone()));
        }
        Ok(SlotQuote {
            slot_id: slot.id.clone(),
            quote: quote(start, end, slot.hourly_price)?,
        })
    }

    /// Human-readable duration, e.g. "2 hrs", "30 min", "1 hr 15 min".
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_minutes)
    }
}

pub(crate) fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rem = minutes % 60;
    let unit = if hours > 1 { "hrs" } else { "hr" };
    match (hours, rem) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} {unit}"),
        (h, m) => format!("{h} {unit} {m} min"),
    }
}
