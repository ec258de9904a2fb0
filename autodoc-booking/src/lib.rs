pub mod booking;
pub mod quote;
pub mod rates;

pub use booking::{Booking, BookingError, BookingStatus};
pub use quote::{quote, Quote, QuoteError, SlotQuote};
pub use rates::{RateCard, RateError};
