//! devdns application layer: the record synthesizer and the resolution engine
pub mod ports;
pub mod services;
pub mod use_cases;
