//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories) are implemented by outbound adapters; driving
//! ports (queries and commands) are consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod extension_command;
mod extension_query;
mod extension_repository;

#[cfg(test)]
pub use extension_command::MockExtensionCommand;
pub use extension_command::ExtensionCommand;
#[cfg(test)]
pub use extension_query::MockExtensionQuery;
pub use extension_query::ExtensionQuery;
#[cfg(test)]
pub use extension_repository::MockExtensionRepository;
pub use extension_repository::{
    ExtensionRepository, ExtensionRepositoryError, FixtureExtensionRepository,
};
