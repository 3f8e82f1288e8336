//! Synthetic market data. Everything here is generated client-side from a
//! pseudo-random source; there is no feed, no cache, no history.

mod asset;
mod series;
mod snapshot;

pub use asset::{AssetSpec, PriceBand};
pub use series::{Sparkline, TrendPoint, TrendSeries};
pub use snapshot::MarketSnapshot;
