use serde::{Deserialize, Serialize};

/// Status of a parking slot as rendered on the grid.
///
/// `Selected` is a transient overlay applied by the selection board on top of
/// an `Available` slot; it is never stored as a slot's base status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Occupied,
    Blocked,
    Selected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    Covered,
    Regular,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    TwoWheeler,
    FourWheeler,
}

/// One parking slot in a facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Unique across the whole facility, e.g. "1-A3" (floor 1, row A, col 3).
    pub id: String,
    /// Position within the floor, e.g. "A3".
    pub number: String,
    pub floor: u32,
    pub status: SlotStatus,
    pub slot_type: SlotType,
    pub vehicle: VehicleKind,
    /// Walking distance from the entry gate, in meters.
    pub distance_m: u32,
    /// Price per hour in whole currency units.
    pub hourly_price: i32,
}

impl Slot {
    /// Only slots whose base status is `Available` can take the selection
    /// overlay or be quoted.
    pub fn is_selectable(&self) -> bool {
        self.status == SlotStatus::Available
    }

    /// Status to render for this slot given the board's current selection.
    pub fn effective_status(&self, selected_id: Option<&str>) -> SlotStatus {
        if selected_id == Some(self.id.as_str()) {
            SlotStatus::Selected
        } else {
            self.status
        }
    }
}
