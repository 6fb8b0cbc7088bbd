//! Broker ledger: cash balance and position accounting.

use crate::types::{Position, Trade, TradeSide};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A simulated broker account holding cash and stock positions.
///
/// All mutation goes through [`buy`](Broker::buy) and [`sell`](Broker::sell);
/// a position is removed as soon as its share count reaches zero.
#[derive(Debug, Clone)]
pub struct Broker {
    /// Display name of the account
    name: String,
    /// Current cash balance
    cash: f64,
    /// Balance the account was opened with
    starting_balance: f64,
    /// Open positions, one entry per symbol
    positions: Vec<Position>,
    /// Executed trades, oldest first
    trades: Vec<Trade>,
}

impl Broker {
    /// Create a new broker account with the given name and starting balance.
    pub fn new(name: &str, starting_balance: f64) -> Self {
        Self {
            name: name.to_string(),
            cash: starting_balance,
            starting_balance,
            positions: Vec::new(),
            trades: Vec::new(),
        }
    }

    /// Get the account name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current cash balance.
    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Get all open positions.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Find an open position by symbol.
    pub fn position(&self, symbol: &str) -> Option<&Position> {
        let symbol_upper = symbol.trim().to_uppercase();
        self.positions.iter().find(|p| p.symbol == symbol_upper)
    }

    /// Get all executed trades, oldest first.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Execute a buy order.
    ///
    /// Debits `price * shares` from cash and updates the position. If the
    /// symbol is already held, the cost basis becomes the weighted average of
    /// all purchases:
    /// `new_basis = (old_basis * old_shares + price * shares) / total_shares`.
    pub fn buy(&mut self, symbol: &str, price: f64, shares: u64) -> Result<Trade> {
        let symbol = normalize_symbol(symbol)?;
        if shares == 0 {
            return Err(Error::InvalidOperation(
                "share count must be positive".to_string(),
            ));
        }
        if price < 0.0 {
            return Err(Error::InvalidOperation(
                "price must be non-negative".to_string(),
            ));
        }

        let cost = price * shares as f64;
        if cost > self.cash {
            return Err(Error::InsufficientFunds {
                symbol,
                shares,
                needed: cost,
                available: self.cash,
            });
        }

        self.cash -= cost;

        if let Some(pos) = self.positions.iter_mut().find(|p| p.symbol == symbol) {
            let total_shares = pos.shares + shares;
            pos.cost_basis = (pos.cost_basis * pos.shares as f64 + cost) / total_shares as f64;
            pos.shares = total_shares;
        } else {
            self.positions.push(Position::new(&symbol, shares, price));
        }

        let trade = Trade::new(&symbol, TradeSide::Buy, shares, price);
        self.trades.push(trade.clone());
        Ok(trade)
    }

    /// Execute a sell order.
    ///
    /// Credits `price * shares` to cash and decrements the held shares,
    /// removing the position entirely when it reaches zero. The cost basis of
    /// a partially sold position is left untouched.
    pub fn sell(&mut self, symbol: &str, price: f64, shares: u64) -> Result<Trade> {
        let symbol = normalize_symbol(symbol)?;
        if shares == 0 {
            return Err(Error::InvalidOperation(
                "share count must be positive".to_string(),
            ));
        }

        let idx = self
            .positions
            .iter()
            .position(|p| p.symbol == symbol)
            .ok_or_else(|| Error::InsufficientShares {
                symbol: symbol.clone(),
                requested: shares,
                held: 0,
            })?;

        let held = self.positions[idx].shares;
        if held < shares {
            return Err(Error::InsufficientShares {
                symbol,
                requested: shares,
                held,
            });
        }

        self.cash += price * shares as f64;

        let remaining = held - shares;
        if remaining == 0 {
            self.positions.remove(idx);
        } else {
            self.positions[idx].shares = remaining;
        }

        let trade = Trade::new(&symbol, TradeSide::Sell, shares, price);
        self.trades.push(trade.clone());
        Ok(trade)
    }

    /// Get a snapshot of the current account state.
    pub fn status(&self) -> BrokerStatus {
        BrokerStatus {
            name: self.name.clone(),
            cash: self.cash,
            starting_balance: self.starting_balance,
            total_cost: self.positions.iter().map(Position::total_cost).sum(),
            position_count: self.positions.len(),
            trade_count: self.trades.len(),
            positions: self.positions.clone(),
        }
    }
}

/// Serializable snapshot of a broker account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerStatus {
    pub name: String,
    pub cash: f64,
    pub starting_balance: f64,
    pub total_cost: f64,
    pub position_count: usize,
    pub trade_count: usize,
    pub positions: Vec<Position>,
}

/// Normalize a symbol to trimmed uppercase.
fn normalize_symbol(symbol: &str) -> Result<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidOperation(
            "symbol must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_uppercase())
}
