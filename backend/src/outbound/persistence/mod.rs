//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module; repositories translate them into domain types and map
//! pool and Diesel failures into port errors.
//!
//! # Example
//!
//! ```ignore
//! use pbx_backend::domain::DEFAULT_DOMAIN_UUID;
//! use pbx_backend::outbound::persistence::{DbPool, DieselExtensionRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/pbx")).await?;
//! let repo = DieselExtensionRepository::new(pool, DEFAULT_DOMAIN_UUID);
//! ```

mod diesel_extension_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_extension_repository::DieselExtensionRepository;
pub use migrations::{MIGRATIONS, MigrationError, apply_migrations};
pub use pool::{DEFAULT_POOL_MAX_SIZE, DbPool, PoolConfig, PoolError};
