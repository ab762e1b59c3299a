//! Outbound adapters implementing the domain ports.

pub mod checkout;
pub mod http;
pub mod storage;
