//! Core data types for the AlphaTrade broker.

use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A position in the portfolio representing shares owned of a particular symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// Stock ticker symbol (uppercase)
    pub symbol: String,
    /// Number of shares owned
    pub shares: u64,
    /// Average cost per share
    pub cost_basis: f64,
}

impl Position {
    /// Create a new position with the given symbol, shares, and cost basis.
    pub fn new(symbol: &str, shares: u64, cost_basis: f64) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            shares,
            cost_basis,
        }
    }

    /// Calculate the total cost of this position.
    pub fn total_cost(&self) -> f64 {
        self.shares as f64 * self.cost_basis
    }
}

/// A single executed trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Stock symbol
    pub symbol: String,
    /// Buy or Sell
    pub side: TradeSide,
    /// Number of shares
    pub shares: u64,
    /// Price per share at execution
    pub price: f64,
    /// Total value of the trade
    pub value: f64,
    /// When the trade was executed
    pub executed_at: DateTime<Utc>,
}

impl Trade {
    /// Create a new trade.
    pub fn new(symbol: &str, side: TradeSide, shares: u64, price: f64) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            side,
            shares,
            price,
            value: shares as f64 * price,
            executed_at: Utc::now(),
        }
    }
}

/// Trade direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl std::str::FromStr for TradeSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(TradeSide::Buy),
            "sell" => Ok(TradeSide::Sell),
            _ => Err(Error::InvalidAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_new() {
        let pos = Position::new("aapl", 10, 150.0);
        assert_eq!(pos.symbol, "AAPL");
        assert_eq!(pos.shares, 10);
        assert_eq!(pos.cost_basis, 150.0);
    }

    #[test]
    fn test_position_total_cost() {
        let pos = Position::new("AAPL", 10, 150.0);
        assert_eq!(pos.total_cost(), 1500.0);
    }

    #[test]
    fn test_trade_new() {
        let trade = Trade::new("aapl", TradeSide::Buy, 10, 150.0);
        assert_eq!(trade.symbol, "AAPL");
        assert_eq!(trade.side, TradeSide::Buy);
        assert_eq!(trade.value, 1500.0);
    }

    #[test]
    fn test_trade_side_from_str() {
        assert_eq!("buy".parse::<TradeSide>().unwrap(), TradeSide::Buy);
        assert_eq!("SELL".parse::<TradeSide>().unwrap(), TradeSide::Sell);

        let result = "hold".parse::<TradeSide>();
        assert!(matches!(result, Err(Error::InvalidAction(_))));
    }
}
