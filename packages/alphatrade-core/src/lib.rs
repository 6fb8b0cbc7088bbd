//! AlphaTrade core - portfolio ledger and quote simulation.
//!
//! This crate provides the accounting core of the AlphaTrade simulator:
//!
//! - **Broker**: cash balance and position tracking with cost averaging
//! - **Quotes**: pluggable price source with a uniform random default
//!
//! # Example
//!
//! ```rust
//! use alphatrade_core::Broker;
//!
//! let mut broker = Broker::new("AlphaTrade", 10_000.0);
//!
//! // Buy 10 shares at $100 each
//! let trade = broker.buy("AAPL", 100.0, 10).unwrap();
//! println!("Bought {} shares at ${}", trade.shares, trade.price);
//!
//! // Cash went down by the cost of the trade
//! assert_eq!(broker.cash(), 9_000.0);
//! ```

pub mod broker;
pub mod quote;
pub mod types;

// Re-export commonly used types
pub use broker::{Broker, BrokerStatus};
pub use quote::{round_to_cents, FixedOracle, PriceOracle, RandomOracle};
pub use types::{Position, Trade, TradeSide};

/// Error types for alphatrade-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Insufficient funds to buy {shares} shares of {symbol}: need ${needed:.2}, have ${available:.2}")]
    InsufficientFunds {
        symbol: String,
        shares: u64,
        needed: f64,
        available: f64,
    },

    #[error("Not enough shares of {symbol} to sell: requested {requested}, held {held}")]
    InsufficientShares {
        symbol: String,
        requested: u64,
        held: u64,
    },

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for alphatrade-core operations.
pub type Result<T> = std::result::Result<T, Error>;
