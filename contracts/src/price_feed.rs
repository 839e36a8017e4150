//! Mock Price Feed Contract
//!
//! Aggregator-style feed used on local and test networks. Anyone can push a
//! new answer; each update starts a new round stamped with the block time.

use odra::prelude::*;
use crate::types::PriceData;

/// Default ETH/USD answer ($2000, 8 decimals)
pub const ETH_USD_PRICE: i64 = 2000_0000_0000;

/// Default BTC/USD answer ($1000, 8 decimals)
pub const BTC_USD_PRICE: i64 = 1000_0000_0000;

/// Mock aggregator
#[odra::module]
pub struct MockPriceFeed {
    /// Decimal places of the answer
    decimals: Var<u8>,
    /// Latest answer
    answer: Var<i64>,
    /// Latest round id
    round_id: Var<u64>,
    /// Block time of the latest answer
    updated_at: Var<u64>,
}

#[odra::module]
impl MockPriceFeed {
    /// Initialize with a first answer
    pub fn init(&mut self, decimals: u8, initial_answer: i64) {
        self.decimals.set(decimals);
        self.update_answer(initial_answer);
    }

    /// Publish a new answer
    pub fn update_answer(&mut self, answer: i64) {
        let round = self.round_id.get().unwrap_or(0) + 1;
        self.answer.set(answer);
        self.round_id.set(round);
        self.updated_at.set(self.env().get_block_time());
    }

    /// Latest answer with its round metadata
    pub fn latest_round_data(&self) -> PriceData {
        PriceData {
            round_id: self.round_id.get().unwrap_or(0),
            answer: self.answer.get().unwrap_or(0),
            decimals: self.decimals(),
            updated_at: self.updated_at.get().unwrap_or(0),
        }
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(8)
    }
}
