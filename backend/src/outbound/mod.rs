//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed extension repository using Diesel.
//!
//! Adapters only translate between domain types and infrastructure
//! representations.

pub mod persistence;
