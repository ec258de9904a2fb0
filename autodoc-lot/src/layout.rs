use serde::{Deserialize, Serialize};

use crate::slot::SlotStatus;

/// Layout and pricing configuration for one parking facility.
///
/// Deserializable so a vendor's lot setup can be loaded as-is; `validate`
/// must pass before the layout is handed to the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotLayout {
    pub floors: u32,
    /// Row labels, top to bottom (e.g. ["A", "B", "C"]).
    pub rows: Vec<String>,
    pub cols_per_row: u32,
    /// Repeating base-status pattern applied by position index.
    pub status_pattern: Vec<SlotStatus>,
    /// Price per hour in whole currency units, applied to every slot.
    pub hourly_price: i32,
    /// Probability that a slot is covered rather than regular.
    #[serde(default = "default_covered_ratio")]
    pub covered_ratio: f64,
    /// Probability that a slot is sized for two-wheelers.
    #[serde(default = "default_two_wheeler_ratio")]
    pub two_wheeler_ratio: f64,
    #[serde(default = "default_min_distance_m")]
    pub min_distance_m: u32,
    #[serde(default = "default_max_distance_m")]
    pub max_distance_m: u32,
}

fn default_covered_ratio() -> f64 {
    0.2
}

fn default_two_wheeler_ratio() -> f64 {
    0.4
}

fn default_min_distance_m() -> u32 {
    10
}

fn default_max_distance_m() -> u32 {
    100
}

impl Default for LotLayout {
    /// The demo facility: 2 floors, rows A-E, 6 columns, ~60% available.
    fn default() -> Self {
        use SlotStatus::{Available, Blocked, Occupied};
        Self {
            floors: 2,
            rows: ["A", "B", "C", "D", "E"].iter().map(|r| r.to_string()).collect(),
            cols_per_row: 6,
            status_pattern: vec![
                Available, Occupied, Available, Available, Occupied, Blocked, Available,
                Available, Occupied, Available,
            ],
            hourly_price: 40,
            covered_ratio: default_covered_ratio(),
            two_wheeler_ratio: default_two_wheeler_ratio(),
            min_distance_m: default_min_distance_m(),
            max_distance_m: default_max_distance_m(),
        }
    }
}

impl LotLayout {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.floors < 1 {
            return Err(LayoutError::NoFloors);
        }
        if self.rows.is_empty() {
            return Err(LayoutError::NoRows);
        }
        if self.cols_per_row < 1 {
            return Err(LayoutError::NoColumns);
        }
        if self.status_pattern.is_empty() {
            return Err(LayoutError::EmptyStatusPattern);
        }
        if self.status_pattern.contains(&SlotStatus::Selected) {
            return Err(LayoutError::SelectedInPattern);
        }
        if self.hourly_price < 0 {
            return Err(LayoutError::NegativePrice(self.hourly_price));
        }
        if !(0.0..=1.0).contains(&self.covered_ratio) {
            return Err(LayoutError::RatioOutOfRange("covered_ratio", self.covered_ratio));
        }
        if !(0.0..=1.0).contains(&self.two_wheeler_ratio) {
            return Err(LayoutError::RatioOutOfRange(
                "two_wheeler_ratio",
                self.two_wheeler_ratio,
            ));
        }
        if self.min_distance_m > self.max_distance_m {
            return Err(LayoutError::DistanceRange {
                min: self.min_distance_m,
                max: self.max_distance_m,
            });
        }
        Ok(())
    }

    pub fn slots_per_floor(&self) -> usize {
        self.rows.len() * self.cols_per_row as usize
    }

    pub fn total_slots(&self) -> usize {
        self.floors as usize * self.slots_per_floor()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Layout must have at least one floor")]
    NoFloors,

    #[error("Layout must have at least one row")]
    NoRows,

    #[error("Layout must have at least one column per row")]
    NoColumns,

    #[error("Status pattern must not be empty")]
    EmptyStatusPattern,

    #[error("Status pattern must not contain the transient 'selected' status")]
    SelectedInPattern,

    #[error("Hourly price must be non-negative, got {0}")]
    NegativePrice(i32),

    #[error("{0} must be within [0, 1], got {1}")]
    RatioOutOfRange(&'static str, f64),

    #[error("Distance range is inverted: min {min}m > max {max}m")]
    DistanceRange { min: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_valid() {
        let layout = LotLayout::default();
        layout.validate().unwrap();
        assert_eq!(layout.slots_per_floor(), 30);
        assert_eq!(layout.total_slots(), 60);
    }

    #[test]
    fn rejects_malformed_layouts() {
        let mut layout = LotLayout::default();
        layout.floors = 0;
        assert!(matches!(layout.validate(), Err(LayoutError::NoFloors)));

        let mut layout = LotLayout::default();
        layout.status_pattern.clear();
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::EmptyStatusPattern)
        ));

        let mut layout = LotLayout::default();
        layout.cols_per_row = 0;
        assert!(matches!(layout.validate(), Err(LayoutError::NoColumns)));

        let mut layout = LotLayout::default();
        layout.status_pattern.push(SlotStatus::Selected);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::SelectedInPattern)
        ));

        let mut layout = LotLayout::default();
        layout.hourly_price = -5;
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::NegativePrice(-5))
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"
            {
                "floors": 1,
                "rows": ["A"],
                "cols_per_row": 4,
                "status_pattern": ["available", "occupied"],
                "hourly_price": 30
            }
        "#;
        let layout: LotLayout = serde_json::from_str(json).expect("Failed to deserialize");
        layout.validate().unwrap();
        assert_eq!(layout.covered_ratio, 0.2);
        assert_eq!(layout.min_distance_m, 10);
        assert_eq!(layout.max_distance_m, 100);
        assert_eq!(layout.total_slots(), 4);
    }
}
