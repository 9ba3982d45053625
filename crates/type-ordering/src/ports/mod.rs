//! Ports for Type Ordering

pub mod inbound;

pub use inbound::TypeOrderingApi;
