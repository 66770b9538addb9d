//! Domain primitives, ports, and use-cases.
//!
//! Purpose: define the extension record and the transport-agnostic error
//! model shared by the HTTP and persistence adapters.
//!
//! Public surface:
//! - Error / ErrorCode: error payload and stable error identifier.
//! - Extension, ExtensionId, ExtensionDraft, ExtensionChanges: extension
//!   record, identifier, creation input, and partial update.
//! - PageRequest: listing window.
//! - ExtensionService: implementation of the driving ports.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod extension;
pub mod extension_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::extension::{
    DEFAULT_DOMAIN_UUID, DEFAULT_PAGE_LIMIT, Extension, ExtensionChanges, ExtensionDraft,
    ExtensionId, PageRequest,
};
pub use self::extension_service::{EXTENSION_NOT_FOUND, ExtensionService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

