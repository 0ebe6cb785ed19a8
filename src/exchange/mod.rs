pub mod fetcher;
pub mod http;
pub mod traits;
pub mod types;
pub mod urls;

pub mod binance;
pub mod bitget;
pub mod okx;

#[cfg(test)]
pub(crate) mod mock;
