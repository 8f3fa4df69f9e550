#![no_std]

multiversx_sc::imports!();

pub mod constants;
pub mod errors;
pub mod events;
pub mod median;
pub mod rounds;
pub mod storage;

use common_structs::PriceFeed;
use errors::ERROR_NO_ROUND;

/// Oracle feed store read by the controller.
///
/// Whitelisted oracles push prices per `from/to` pair and a round closes on the
/// median once the quorum is met. The controller reads the `rounds` storage
/// directly, so the contract starts paused until the owner opens it.
#[multiversx_sc::contract]
pub trait PriceAggregator:
    multiversx_sc_modules::pause::PauseModule
    + storage::Storage
    + events::EventsModule
    + rounds::RoundModule
{
    #[init]
    fn init(&self, quorum: usize, oracles: MultiValueEncoded<ManagedAddress>) {
        for oracle in oracles {
            self.oracles().insert(oracle);
        }

        self.require_valid_quorum(quorum);
        self.quorum().set(quorum);

        self.set_paused(true);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.set_paused(true);
    }

    /// Adds one oracle's price to the open round of `from/to`.
    #[endpoint(submit)]
    fn submit(&self, from: ManagedBuffer, to: ManagedBuffer, timestamp: u64, price: BigUint) {
        self.require_not_paused();
        self.require_is_oracle();
        self.require_valid_submission_timestamp(timestamp);

        self.record_price(&from, &to, price);
    }

    #[view(latestPriceFeed)]
    fn latest_price_feed(&self, from: ManagedBuffer, to: ManagedBuffer) -> PriceFeed<Self::Api> {
        let latest = self.rounds(&from, &to);
        require!(!latest.is_empty(), ERROR_NO_ROUND);

        let round = latest.get();
        PriceFeed {
            round_id: round.round,
            from,
            to,
            timestamp: round.timestamp,
            price: round.price,
        }
    }
}
