use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three priced ride categories, each derived from the base price by a
/// fixed multiplier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideTier {
    Economy,
    Premium,
    #[serde(rename = "SUV")]
    Suv,
}

impl RideTier {
    pub const ALL: [RideTier; 3] = [RideTier::Economy, RideTier::Premium, RideTier::Suv];

    pub fn multiplier(self) -> f64 {
        match self {
            RideTier::Economy => 1.0,
            RideTier::Premium => 1.5,
            RideTier::Suv => 2.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RideTier::Economy => "Economy",
            RideTier::Premium => "Premium",
            RideTier::Suv => "SUV",
        }
    }
}

impl std::fmt::Display for RideTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A priced tier offered for the current pickup/destination pair. Derived,
/// never stored beyond the single ride-history record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RideOption {
    pub tier: RideTier,
    pub price: f64,
}

impl RideOption {
    /// Price with exactly two decimals, e.g. "150.00".
    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// A confirmed booking. Created on tier selection; has no further lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub tier: RideTier,
    pub confirmation_code: u16,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(tier: RideTier, confirmation_code: u16) -> Self {
        Self {
            id: Uuid::new_v4(),
            tier,
            confirmation_code,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_multipliers_are_fixed() {
        assert_eq!(RideTier::Economy.multiplier(), 1.0);
        assert_eq!(RideTier::Premium.multiplier(), 1.5);
        assert_eq!(RideTier::Suv.multiplier(), 2.0);
    }

    #[test]
    fn suv_serializes_with_its_display_name() {
        let json = serde_json::to_string(&RideTier::Suv).unwrap();
        assert_eq!(json, "\"SUV\"");
    }
}
