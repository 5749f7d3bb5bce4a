//! Pure billing and aggregation functions. Nothing here touches the store.

pub mod counters;
pub mod earnings;
pub mod filter;
pub mod normalize;
pub mod payment;
pub mod period;
pub mod summary;
