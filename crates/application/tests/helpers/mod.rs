#![allow(dead_code)]

mod messages;
mod mock_forwarder;

pub use messages::*;
pub use mock_forwarder::MockUpstreamForwarder;
