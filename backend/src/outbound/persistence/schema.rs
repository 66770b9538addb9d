//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! (see `diesel.toml`) after changing a migration.

diesel::table! {
    /// Telephony extensions.
    ///
    /// `insert_date` is set by the database and only used to order listings.
    v_extensions (extension_uuid) {
        extension_uuid -> Uuid,
        domain_uuid -> Uuid,
        extension -> Varchar,
        number_alias -> Nullable<Varchar>,
        password -> Varchar,
        accountcode -> Nullable<Varchar>,
        effective_caller_id_name -> Nullable<Varchar>,
        effective_caller_id_number -> Nullable<Varchar>,
        outbound_caller_id_name -> Nullable<Varchar>,
        outbound_caller_id_number -> Nullable<Varchar>,
        enabled -> Bool,
        description -> Nullable<Text>,
        insert_date -> Timestamptz,
    }
}
