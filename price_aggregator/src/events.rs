multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("new_round")]
    fn new_round_event(
        &self,
        #[indexed] from: &ManagedBuffer,
        #[indexed] to: &ManagedBuffer,
        #[indexed] round: u32,
        #[indexed] timestamp: u64,
        price: &BigUint,
    );

    #[event("discard_round")]
    fn discard_round_event(
        &self,
        #[indexed] from: &ManagedBuffer,
        #[indexed] to: &ManagedBuffer,
        #[indexed] opened_at: u64,
    );
}
