use serde::{Deserialize, Serialize};

/// A vendor's published pricing for one facility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateCard {
    /// Per-hour rate in whole currency units.
    #[serde(default = "default_hourly")]
    pub hourly: i32,
    /// Flat per-day rate.
    #[serde(default = "default_daily")]
    pub daily: i32,
    /// Surcharge per overstayed hour, billed on top of the hourly rate.
    #[serde(default = "default_overstay")]
    pub overstay_per_hour: i32,
}

fn default_hourly() -> i32 {
    40
}

fn default_daily() -> i32 {
    200
}

fn default_overstay() -> i32 {
    50
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            hourly: default_hourly(),
            daily: default_daily(),
            overstay_per_hour: default_overstay(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("{0} rate must be non-negative, got {1}")]
    NegativeRate(&'static str, i32),
}

impl RateCard {
    pub fn validate(&self) -> Result<(), RateError> {
        if self.hourly < 0 {
            return Err(RateError::NegativeRate("hourly", self.hourly));
        }
        if self.daily < 0 {
            return Err(RateError::NegativeRate("daily", self.daily));
        }
        if self.overstay_per_hour < 0 {
            return Err(RateError::NegativeRate("overstay", self.overstay_per_hour));
        }
        Ok(())
    }

    /// Extra charge for staying past the booked window.
    ///
    /// Each started overstay hour is billed at the hourly rate plus the
    /// overstay surcharge. Returns 0 when the vehicle left within its window.
    pub fn overstay_charge(&self, booked_minutes: u32, actual_minutes: u32) -> i32 {
        if actual_minutes <= booked_minutes {
            return 0;
        }
        let excess_hours = (actual_minutes - booked_minutes).div_ceil(60);
        excess_hours as i32 * (self.hourly + self.overstay_per_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overstay_no_charge() {
        let rates = RateCard::default();
        assert_eq!(rates.overstay_charge(120, 120), 0);
        assert_eq!(rates.overstay_charge(120, 90), 0);
    }

    #[test]
    fn overstay_bills_hourly_plus_surcharge() {
        let rates = RateCard::default();
        // 30 extra minutes round up to one overstay hour: 40 + 50.
        assert_eq!(rates.overstay_charge(120, 150), 90);
        assert_eq!(rates.overstay_charge(120, 240), 180);
    }

    #[test]
    fn negative_rates_rejected() {
        let rates = RateCard {
            daily: -1,
            ..RateCard::default()
        };
        assert!(matches!(
            rates.validate(),
            Err(RateError::NegativeRate("daily", -1))
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let rates: RateCard = serde_json::from_str(r#"{ "hourly": 60 }"#).unwrap();
        rates.validate().unwrap();
        assert_eq!(rates.hourly, 60);
        assert_eq!(rates.daily, 200);
        assert_eq!(rates.overstay_per_hour, 50);
    }
}
