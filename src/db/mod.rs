//! Document store module: connection handling and the insert gateway.

mod store;

pub use store::{DocumentStore, StoreError};

/// Collection holding trade-account submissions.
pub const TRADE_ACCOUNT_COLLECTION: &str = "tradeaccount";
/// Collection holding quote-request submissions.
pub const QUOTE_REQUEST_COLLECTION: &str = "quoterequest";
