use rand::Rng;
use serde::Serialize;

use crate::generator::generate_slots;
use crate::layout::{LayoutError, LotLayout};
use crate::slot::{Slot, SlotStatus};

/// Outcome of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The overlay now sits on the requested slot.
    Selected,
    /// The requested slot was already selected; the overlay was cleared.
    Cleared,
    /// Unknown id or a non-selectable slot. Board state is unchanged.
    Rejected,
}

/// Legend counts for one facility view.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LotSummary {
    pub available: usize,
    pub occupied: usize,
    pub blocked: usize,
    pub total: usize,
}

/// Slot inventory for one facility view, with the single-slot selection
/// overlay.
///
/// The grid is generated once and is immutable afterwards; the only mutable
/// state is which slot (if any) currently carries the `Selected` overlay.
pub struct SlotBoard {
    slots: Vec<Slot>,
    selected: Option<String>,
}

impl SlotBoard {
    /// Generate a board from a layout with an injected randomness source.
    pub fn generate<R: Rng>(layout: &LotLayout, rng: &mut R) -> Result<Self, LayoutError> {
        Ok(Self {
            slots: generate_slots(layout, rng)?,
            selected: None,
        })
    }

    /// Generate a board with OS randomness for the mock attributes.
    pub fn generate_default(layout: &LotLayout) -> Result<Self, LayoutError> {
        Self::generate(layout, &mut rand::thread_rng())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Sorted, de-duplicated floor numbers present on the board.
    pub fn floors(&self) -> Vec<u32> {
        let mut floors: Vec<u32> = self.slots.iter().map(|s| s.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    pub fn floor_slots(&self, floor: u32) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(move |s| s.floor == floor)
    }

    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    /// Move, set or toggle the selection overlay.
    ///
    /// Tapping an occupied, blocked or unknown slot is rejected without
    /// touching the current selection. Tapping the selected slot again clears
    /// it; tapping a different available slot moves the overlay there.
    pub fn select(&mut self, slot_id: &str) -> Selection {
        let Some(slot) = self.slots.iter().find(|s| s.id == slot_id) else {
            tracing::debug!(slot_id, "select ignored: no such slot");
            return Selection::Rejected;
        };
        if !slot.is_selectable() {
            return Selection::Rejected;
        }
        if self.selected.as_deref() == Some(slot_id) {
            self.selected = None;
            return Selection::Cleared;
        }
        self.selected = Some(slot_id.to_string());
        Selection::Selected
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_slot(&self) -> Option<&Slot> {
        self.selected.as_deref().and_then(|id| self.slot(id))
    }

    pub fn summary(&self) -> LotSummary {
        let mut summary = LotSummary {
            available: 0,
            occupied: 0,
            blocked: 0,
            total: self.slots.len(),
        };
        for slot in &self.slots {
            match slot.status {
                SlotStatus::Available => summary.available += 1,
                SlotStatus::Occupied => summary.occupied += 1,
                SlotStatus::Blocked => summary.blocked += 1,
                // Selected never appears as a base status.
                SlotStatus::Selected => {}
            }
        }
        summary
    }
}
