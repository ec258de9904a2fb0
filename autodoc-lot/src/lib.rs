pub mod board;
pub mod generator;
pub mod layout;
pub mod slot;

pub use board::{LotSummary, Selection, SlotBoard};
pub use generator::generate_slots;
pub use layout::{LayoutError, LotLayout};
pub use slot::{Slot, SlotStatus, SlotType, VehicleKind};
