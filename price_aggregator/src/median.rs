use multiversx_sc::imports::*;

/// Middle of the sorted prices, the mean of the two middle ones for an even
/// count. `None` for an empty slice.
pub fn median<M: ManagedTypeApi>(prices: &mut [BigUint<M>]) -> Option<BigUint<M>> {
    if prices.is_empty() {
        return None;
    }

    prices.sort_unstable();
    let middle = prices.len() / 2;
    if prices.len() % 2 == 1 {
        return Some(prices[middle].clone());
    }

    Some((&prices[middle - 1] + &prices[middle]) / 2u64)
}
