#![no_std]

pub mod proxy_aggregator;
pub mod proxy_pool;
