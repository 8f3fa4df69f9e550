multiversx_sc::imports!();

use common_structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait Storage {
    #[view(getOracles)]
    #[storage_mapper("oracles")]
    fn oracles(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Distinct oracles needed to close a round.
    #[view(getQuorum)]
    #[storage_mapper("quorum")]
    fn quorum(&self) -> SingleValueMapper<usize>;

    /// Prices of the open round, one per oracle.
    #[storage_mapper("pending_prices")]
    fn pending_prices(
        &self,
        from: &ManagedBuffer,
        to: &ManagedBuffer,
    ) -> MapMapper<ManagedAddress, BigUint>;

    #[storage_mapper("round_opened_at")]
    fn round_opened_at(&self, from: &ManagedBuffer, to: &ManagedBuffer)
        -> SingleValueMapper<u64>;

    /// Latest completed round per pair, also read cross-contract by the controller.
    #[storage_mapper("rounds")]
    fn rounds(
        &self,
        from: &ManagedBuffer,
        to: &ManagedBuffer,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>>;
}
