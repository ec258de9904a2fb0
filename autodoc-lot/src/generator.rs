use rand::Rng;

use crate::layout::{LayoutError, LotLayout};
use crate::slot::{Slot, SlotType, VehicleKind};

/// Materialize the full slot grid for a facility.
///
/// The base status of each slot is deterministic: position index
/// `idx = row_index * cols_per_row + col` (1-based column) picks into the
/// layout's repeating status pattern. Slot type, vehicle compatibility and
/// distance come from the supplied `rng`, so tests can seed it and production
/// callers can pass `thread_rng`.
pub fn generate_slots<R: Rng>(layout: &LotLayout, rng: &mut R) -> Result<Vec<Slot>, LayoutError> {
    layout.validate()?;

    let pattern_len = layout.status_pattern.len();
    let mut slots = Vec::with_capacity(layout.total_slots());

    for floor in 1..=layout.floors {
        for (ri, row) in layout.rows.iter().enumerate() {
            for col in 1..=layout.cols_per_row {
                let idx = ri * layout.cols_per_row as usize + col as usize;
                let number = format!("{row}{col}");
                slots.push(Slot {
                    id: format!("{floor}-{number}"),
                    number,
                    floor,
                    status: layout.status_pattern[idx % pattern_len],
                    slot_type: if rng.gen_bool(layout.covered_ratio) {
                        SlotType::Covered
                    } else {
                        SlotType::Regular
                    },
                    vehicle: if rng.gen_bool(layout.two_wheeler_ratio) {
                        VehicleKind::TwoWheeler
                    } else {
                        VehicleKind::FourWheeler
                    },
                    distance_m: rng.gen_range(layout.min_distance_m..=layout.max_distance_m),
                    hourly_price: layout.hourly_price,
                });
            }
        }
    }

    tracing::debug!(slots = slots.len(), floors = layout.floors, "generated slot grid");
    Ok(slots)
}
