use serde::{Deserialize, Serialize};

/// Taxes and fees applied on top of the base fare
pub const DEFAULT_TAX_RATE: f64 = 0.15;

/// Price summary shown on the booking and confirmation screens
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareBreakdown {
    pub per_passenger: u32,
    pub passengers: u32,
    /// per_passenger * passengers
    pub base: u64,
    pub taxes: u64,
    pub grand_total: u64,
}

impl FareBreakdown {
    /// Taxes are rounded to the nearest whole unit. Negative rates count as zero.
    pub fn compute(per_passenger: u32, passengers: u32, tax_rate: f64) -> Self {
        let base = u64::from(per_passenger) * u64::from(passengers);
        let taxes = (base as f64 * tax_rate.max(0.0)).round() as u64;

        Self {
            per_passenger,
            passengers,
            base,
            taxes,
            grand_total: base + taxes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_two_passengers() {
        let fare = FareBreakdown::compute(449, 2, DEFAULT_TAX_RATE);
        assert_eq!(fare.base, 898);
        // 898 * 0.15 = 134.7
        assert_eq!(fare.taxes, 135);
        assert_eq!(fare.grand_total, 1033);
    }

    #[test]
    fn test_breakdown_without_tax() {
        let fare = FareBreakdown::compute(129, 3, 0.0);
        assert_eq!(fare.base, 387);
        assert_eq!(fare.taxes, 0);
        assert_eq!(fare.grand_total, 387);

        let clamped = FareBreakdown::compute(100, 1, -0.5);
        assert_eq!(clamped.taxes, 0);
    }

    #[test]
    fn test_breakdown_no_passengers() {
        let fare = FareBreakdown::compute(449, 0, DEFAULT_TAX_RATE);
        assert_eq!(fare.grand_total, 0);
    }
}
