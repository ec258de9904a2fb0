use autodoc_booking::{Booking, BookingStatus, Quote, RateCard};
use autodoc_lot::{LotLayout, Selection, SlotBoard};
use chrono::{Duration, NaiveTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn select_quote_confirm_complete_flow() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut board = SlotBoard::generate(&LotLayout::default(), &mut rng).unwrap();

    // Pick the nearest available slot, like the app's default suggestion.
    let chosen = board
        .slots()
        .iter()
        .filter(|s| s.is_selectable())
        .min_by_key(|s| s.distance_m)
        .map(|s| s.id.clone())
        .unwrap();
    assert_eq!(board.select(&chosen), Selection::Selected);

    let slot = board.selected_slot().unwrap();
    let slot_quote = Quote::for_slot(slot, t(9, 0), t(11, 0)).unwrap();
    assert_eq!(slot_quote.quote.duration_minutes, 120);
    assert_eq!(slot_quote.quote.duration_label(), "2 hrs");
    assert_eq!(slot_quote.quote.total_price, 80);

    let number = slot.number.clone();
    let entry = Utc::now();
    let mut booking = Booking::confirm(slot_quote, number, "TN 01 AB 1234", entry);
    assert_eq!(booking.status, BookingStatus::Active);

    // Vehicle leaves 45 minutes late: one overstay hour at 40 + 50 extra.
    let settled = booking
        .complete(entry + Duration::minutes(165), &RateCard::default())
        .unwrap();
    assert_eq!(settled, 80 + 90);
    assert_eq!(booking.status, BookingStatus::Completed);

    // The board clears its overlay when the flow ends.
    board.deselect();
    assert!(board.selected_slot().is_none());
}

#[test]
fn occupied_slot_cannot_reach_a_quote() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut board = SlotBoard::generate(&LotLayout::default(), &mut rng).unwrap();

    let occupied = board
        .slots()
        .iter()
        .find(|s| !s.is_selectable())
        .cloned()
        .unwrap();

    assert_eq!(board.select(&occupied.id), Selection::Rejected);
    assert!(board.selected_slot().is_none());
    assert!(Quote::for_slot(&occupied, t(9, 0), t(10, 0)).is_err());
}

#[test]
fn layout_and_rates_load_from_config_json() {
    let layout: LotLayout = serde_json::from_str(
        r#"
        {
            "floors": 1,
            "rows": ["A", "B"],
            "cols_per_row": 10,
            "status_pattern": ["available"],
            "hourly_price": 60
        }
        "#,
    )
    .unwrap();
    let rates: RateCard = serde_json::from_str(r#"{ "hourly": 60, "daily": 300 }"#).unwrap();
    rates.validate().unwrap();

    let mut rng = StdRng::seed_from_u64(5);
    let board = SlotBoard::generate(&layout, &mut rng).unwrap();
    assert_eq!(board.slots().len(), 20);
    assert!(board.slots().iter().all(|s| s.hourly_price == 60));
    assert_eq!(rates.overstay_per_hour, 50);
}
