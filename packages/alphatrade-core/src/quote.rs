//! Price quote sources.
//!
//! The broker never generates its own prices; it is handed a price and a
//! share count. Quote generation lives behind [`PriceOracle`] so the serving
//! layer can use random prices while tests supply fixed ones.

use rand::Rng;

/// Source of per-symbol price quotes.
pub trait PriceOracle {
    /// Return the current price for a symbol.
    fn quote(&self, symbol: &str) -> f64;
}

/// Quotes drawn uniformly from a fixed price band, rounded to cents.
///
/// Every quote is independent of the symbol and of prior quotes. This is a
/// placeholder price source, not a market simulation.
#[derive(Debug, Clone)]
pub struct RandomOracle {
    min: f64,
    max: f64,
}

impl RandomOracle {
    pub const DEFAULT_MIN: f64 = 50.0;
    pub const DEFAULT_MAX: f64 = 150.0;

    /// Create an oracle over the default [50, 150] band.
    pub fn new() -> Self {
        Self::with_range(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }

    /// Create an oracle over a custom price band.
    pub fn with_range(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for RandomOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceOracle for RandomOracle {
    fn quote(&self, _symbol: &str) -> f64 {
        let mut rng = rand::thread_rng();
        round_to_cents(rng.gen_range(self.min..=self.max))
    }
}

/// Quotes a single fixed price for every symbol.
#[derive(Debug, Clone)]
pub struct FixedOracle {
    price: f64,
}

impl FixedOracle {
    /// Create an oracle that always quotes `price`.
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl PriceOracle for FixedOracle {
    fn quote(&self, _symbol: &str) -> f64 {
        self.price
    }
}

/// Round a value to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_quotes_within_band() {
        let oracle = RandomOracle::new();

        for _ in 0..1000 {
            let price = oracle.quote("ABC");
            assert!(price >= RandomOracle::DEFAULT_MIN);
            assert!(price <= RandomOracle::DEFAULT_MAX);
        }
    }

    #[test]
    fn test_random_quotes_rounded_to_cents() {
        let oracle = RandomOracle::new();

        for _ in 0..100 {
            let price = oracle.quote("ABC");
            let cents = price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_custom_band() {
        let oracle = RandomOracle::with_range(10.0, 11.0);

        for _ in 0..100 {
            let price = oracle.quote("XYZ");
            assert!((10.0..=11.0).contains(&price));
        }
    }

    #[test]
    fn test_fixed_oracle() {
        let oracle = FixedOracle::new(99.5);

        assert_eq!(oracle.quote("ABC"), 99.5);
        assert_eq!(oracle.quote("XYZ"), 99.5);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1.005), 1.0); // binary 1.005 sits just below the midpoint
        assert_eq!(round_to_cents(123.456), 123.46);
        assert_eq!(round_to_cents(50.0), 50.0);
    }
}
