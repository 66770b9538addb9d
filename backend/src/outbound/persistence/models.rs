//! Diesel row types for `v_extensions`.
//!
//! Internal to the persistence adapter; the domain never sees these.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Extension, ExtensionChanges, ExtensionDraft, ExtensionId};

use super::schema::v_extensions;

/// Row read back from `v_extensions`. `insert_date` is not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = v_extensions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExtensionRow {
    pub extension_uuid: Uuid,
    pub domain_uuid: Uuid,
    pub extension: String,
    pub number_alias: Option<String>,
    pub password: String,
    pub accountcode: Option<String>,
    pub effective_caller_id_name: Option<String>,
    pub effective_caller_id_number: Option<String>,
    pub outbound_caller_id_name: Option<String>,
    pub outbound_caller_id_number: Option<String>,
    pub enabled: bool,
    pub description: Option<String>,
}

impl From<ExtensionRow> for Extension {
    fn from(row: ExtensionRow) -> Self {
        Self {
            extension_uuid: ExtensionId::from_uuid(row.extension_uuid),
            domain_uuid: row.domain_uuid,
            extension: row.extension,
            number_alias: row.number_alias,
            password: row.password,
            accountcode: row.accountcode,
            effective_caller_id_name: row.effective_caller_id_name,
            effective_caller_id_number: row.effective_caller_id_number,
            outbound_caller_id_name: row.outbound_caller_id_name,
            outbound_caller_id_number: row.outbound_caller_id_number,
            enabled: row.enabled,
            description: row.description,
        }
    }
}

/// Insert payload; `insert_date` falls back to the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = v_extensions)]
pub(crate) struct NewExtensionRow<'a> {
    pub extension_uuid: Uuid,
    pub domain_uuid: Uuid,
    pub extension: &'a str,
    pub number_alias: Option<&'a str>,
    pub password: &'a str,
    pub accountcode: Option<&'a str>,
    pub effective_caller_id_name: Option<&'a str>,
    pub effective_caller_id_number: Option<&'a str>,
    pub outbound_caller_id_name: Option<&'a str>,
    pub outbound_caller_id_number: Option<&'a str>,
    pub enabled: bool,
    pub description: Option<&'a str>,
}

impl<'a> NewExtensionRow<'a> {
    pub(crate) fn from_draft(id: Uuid, domain_uuid: Uuid, draft: &'a ExtensionDraft) -> Self {
        Self {
            extension_uuid: id,
            domain_uuid,
            extension: &draft.extension,
            number_alias: draft.number_alias.as_deref(),
            password: &draft.password,
            accountcode: draft.accountcode.as_deref(),
            effective_caller_id_name: draft.effective_caller_id_name.as_deref(),
            effective_caller_id_number: draft.effective_caller_id_number.as_deref(),
            outbound_caller_id_name: draft.outbound_caller_id_name.as_deref(),
            outbound_caller_id_number: draft.outbound_caller_id_number.as_deref(),
            enabled: draft.enabled,
            description: draft.description.as_deref(),
        }
    }
}

/// Partial update. Outer `None` skips a column; `Some(None)` writes NULL.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = v_extensions)]
pub(crate) struct ExtensionChangeset<'a> {
    pub extension: Option<&'a str>,
    pub number_alias: Option<Option<&'a str>>,
    pub password: Option<&'a str>,
    pub accountcode: Option<Option<&'a str>>,
    pub effective_caller_id_name: Option<Option<&'a str>>,
    pub effective_caller_id_number: Option<Option<&'a str>>,
    pub outbound_caller_id_name: Option<Option<&'a str>>,
    pub outbound_caller_id_number: Option<Option<&'a str>>,
    pub enabled: Option<bool>,
    pub description: Option<Option<&'a str>>,
}

impl<'a> From<&'a ExtensionChanges> for ExtensionChangeset<'a> {
    fn from(changes: &'a ExtensionChanges) -> Self {
        fn nullable(value: Option<&Option<String>>) -> Option<Option<&str>> {
            value.map(Option::as_deref)
        }

        Self {
            extension: changes.extension.as_deref(),
            number_alias: nullable(changes.number_alias.as_ref()),
            password: changes.password.as_deref(),
            accountcode: nullable(changes.accountcode.as_ref()),
            effective_caller_id_name: nullable(changes.effective_caller_id_name.as_ref()),
            effective_caller_id_number: nullable(changes.effective_caller_id_number.as_ref()),
            outbound_caller_id_name: nullable(changes.outbound_caller_id_name.as_ref()),
            outbound_caller_id_number: nullable(changes.outbound_caller_id_number.as_ref()),
            enabled: changes.enabled,
            description: nullable(changes.description.as_ref()),
        }
    }
}
