use crate::error::{AppError, AppResult};
use crate::models::{RideOption, RideTier};

/// Price the three ride tiers for a trip of `distance_km` at `rate_per_km`.
/// Zero distance is allowed (identical points); a negative or non-finite
/// distance is rejected.
pub fn price_tiers(distance_km: f64, rate_per_km: f64) -> AppResult<Vec<RideOption>> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(AppError::InvalidDistance(distance_km));
    }

    let base = distance_km * rate_per_km;

    Ok(RideTier::ALL
        .into_iter()
        .map(|tier| RideOption {
            tier,
            price: round2(base * tier.multiplier()),
        })
        .collect())
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_km_at_rate_fifteen() {
        let options = price_tiers(10.0, 15.0).unwrap();

        let formatted: Vec<String> = options.iter().map(|o| o.formatted_price()).collect();
        assert_eq!(formatted, vec!["150.00", "225.00", "300.00"]);
        assert_eq!(options[0].tier, RideTier::Economy);
        assert_eq!(options[1].tier, RideTier::Premium);
        assert_eq!(options[2].tier, RideTier::Suv);
    }

    #[test]
    fn zero_distance_prices_everything_at_zero() {
        let options = price_tiers(0.0, 15.0).unwrap();
        assert!(options.iter().all(|o| o.price == 0.0));
        assert!(options.iter().all(|o| o.formatted_price() == "0.00"));
    }

    #[test]
    fn prices_round_to_two_decimals() {
        // 1.234 km * 1.0 = 1.234 -> 1.23; Premium 1.851 -> 1.85; SUV 2.468 -> 2.47
        let options = price_tiers(1.234, 1.0).unwrap();
        assert_eq!(options[0].price, 1.23);
        assert_eq!(options[1].price, 1.85);
        assert_eq!(options[2].price, 2.47);
    }

    #[test]
    fn negative_distance_is_rejected() {
        let err = price_tiers(-1.0, 15.0).unwrap_err();
        assert!(matches!(err, AppError::InvalidDistance(_)));
    }

    #[test]
    fn non_finite_distance_is_rejected() {
        assert!(matches!(
            price_tiers(f64::NAN, 15.0),
            Err(AppError::InvalidDistance(_))
        ));
        assert!(matches!(
            price_tiers(f64::INFINITY, 15.0),
            Err(AppError::InvalidDistance(_))
        ));
    }
}
