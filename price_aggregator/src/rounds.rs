multiversx_sc::imports!();

use common_structs::TimestampedPrice;

use crate::{constants::*, errors::*, events, median::median, storage};

/// # Rounds
///
/// Every pair has at most one open round. Each whitelisted oracle adds one
/// price to it; a repeated submission from the same oracle is ignored. When
/// the quorum is reached the median becomes the pair's latest round and the
/// buffer is cleared. A round left open longer than
/// `MAX_ROUND_DURATION_SECONDS` is dropped by the next submission.
#[multiversx_sc::module]
pub trait RoundModule: storage::Storage + events::EventsModule {
    fn require_is_oracle(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.oracles().contains(&caller), ERROR_NOT_AN_ORACLE);
    }

    fn require_valid_quorum(&self, quorum: usize) {
        require!(
            quorum > 0 && quorum <= self.oracles().len() && quorum <= MAX_QUORUM,
            ERROR_INVALID_QUORUM
        );
    }

    fn require_valid_submission_timestamp(&self, timestamp: u64) {
        let now = self.blockchain().get_block_timestamp();
        require!(timestamp <= now, ERROR_TIMESTAMP_IN_FUTURE);
        require!(
            now - timestamp <= MAX_SUBMISSION_AGE_SECONDS,
            ERROR_SUBMISSION_TOO_OLD
        );
    }

    fn record_price(&self, from: &ManagedBuffer, to: &ManagedBuffer, price: BigUint) {
        require!(price > 0u64, ERROR_ZERO_PRICE);

        let now = self.blockchain().get_block_timestamp();
        let mut pending = self.pending_prices(from, to);
        let opened_at = self.round_opened_at(from, to);

        if pending.is_empty() {
            opened_at.set(now);
        } else if now > opened_at.get() + MAX_ROUND_DURATION_SECONDS {
            self.discard_round_event(from, to, opened_at.get());
            pending.clear();
            opened_at.set(now);
        }

        let caller = self.blockchain().get_caller();
        if pending.contains_key(&caller) {
            return;
        }

        pending.insert(caller, price);
        if pending.len() >= self.quorum().get() {
            self.close_round(from, to);
        }
    }

    /// Publishes the median of the open round as the pair's latest price.
    fn close_round(&self, from: &ManagedBuffer, to: &ManagedBuffer) {
        let mut pending = self.pending_prices(from, to);
        let mut prices = ArrayVec::<BigUint, MAX_QUORUM>::new();
        for price in pending.values() {
            if prices.try_push(price).is_err() {
                sc_panic!(ERROR_INVALID_QUORUM);
            }
        }

        let price = match median(prices.as_mut_slice()) {
            Some(price) => price,
            None => return,
        };

        let latest = self.rounds(from, to);
        let round = if latest.is_empty() {
            1
        } else {
            latest.get().round + 1
        };
        let timestamp = self.blockchain().get_block_timestamp();

        self.new_round_event(from, to, round, timestamp, &price);
        latest.set(TimestampedPrice {
            price,
            timestamp,
            round,
        });

        pending.clear();
        self.round_opened_at(from, to).clear();
    }
}
