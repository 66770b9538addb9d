//! Inbound adapters translating external requests into domain use-case
//! calls. HTTP is the only transport.

pub mod http;
