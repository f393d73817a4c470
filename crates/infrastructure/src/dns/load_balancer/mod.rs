pub mod failover;
pub mod query;

pub use failover::FailoverStrategy;
pub use query::{query_server, QueryAttemptResult};
