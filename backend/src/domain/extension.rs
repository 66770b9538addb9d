//! Extension records managed by the service.
//!
//! An extension is a telephony line record keyed by `extension_uuid` and
//! grouped under a single `domain_uuid`. The types here carry no framework
//! dependencies beyond serde; OpenAPI schemas live in the HTTP adapter.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grouping key assigned to new extensions unless configuration overrides it.
pub const DEFAULT_DOMAIN_UUID: Uuid = uuid::uuid!("664882d5-e861-47aa-b57b-9128631a5837");

/// Page size used when a listing request does not name one.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Stable extension identifier.
///
/// # Examples
/// ```
/// use pbx_backend::domain::ExtensionId;
///
/// let id = ExtensionId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionId(Uuid);

impl ExtensionId {
    /// Parse an identifier from its textual UUID form.
    pub fn new(value: impl AsRef<str>) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value.as_ref()).map(Self)
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Borrow the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for ExtensionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// A stored extension record.
///
/// Field names match the wire and column names one to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    /// Primary key, assigned on creation and never changed.
    pub extension_uuid: ExtensionId,
    /// Grouping key, assigned on creation and never changed.
    pub domain_uuid: Uuid,
    /// Dialable extension number, e.g. `1001`.
    pub extension: String,
    /// Alternative number routed to this extension.
    pub number_alias: Option<String>,
    /// SIP registration secret.
    pub password: String,
    /// Billing account code.
    pub accountcode: Option<String>,
    /// Caller name presented on internal calls.
    pub effective_caller_id_name: Option<String>,
    /// Caller number presented on internal calls.
    pub effective_caller_id_number: Option<String>,
    /// Caller name presented on external calls.
    pub outbound_caller_id_name: Option<String>,
    /// Caller number presented on external calls.
    pub outbound_caller_id_number: Option<String>,
    /// Whether the extension may register and place calls.
    pub enabled: bool,
    /// Free-form note.
    pub description: Option<String>,
}

/// Attributes supplied when creating an extension.
///
/// The identifier and grouping key are assigned by the store. Fields mirror
/// [`Extension`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(missing_docs, reason = "fields mirror the documented Extension record")]
pub struct ExtensionDraft {
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

impl ExtensionDraft {
    /// Draft with only the required attributes; the extension starts enabled.
    ///
    /// # Examples
    /// ```
    /// use pbx_backend::domain::ExtensionDraft;
    ///
    /// let draft = ExtensionDraft::new("1001", "secret");
    /// assert!(draft.enabled);
    /// assert!(draft.description.is_none());
    /// ```
    pub fn new(extension: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            number_alias: None,
            password: password.into(),
            accountcode: None,
            effective_caller_id_name: None,
            effective_caller_id_number: None,
            outbound_caller_id_name: None,
            outbound_caller_id_number: None,
            enabled: true,
            description: None,
        }
    }

    /// Materialise the draft as a stored record.
    #[must_use]
    pub fn into_extension(self, extension_uuid: ExtensionId, domain_uuid: Uuid) -> Extension {
        Extension {
            extension_uuid,
            domain_uuid,
            extension: self.extension,
            number_alias: self.number_alias,
            password: self.password,
            accountcode: self.accountcode,
            effective_caller_id_name: self.effective_caller_id_name,
            effective_caller_id_number: self.effective_caller_id_number,
            outbound_caller_id_name: self.outbound_caller_id_name,
            outbound_caller_id_number: self.outbound_caller_id_number,
            enabled: self.enabled,
            description: self.description,
        }
    }
}

/// Partial update of an extension.
///
/// `None` leaves an attribute untouched. For nullable attributes
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[expect(missing_docs, reason = "fields mirror the documented Extension record")]
pub struct ExtensionChanges {
    pub extension: Option<String>,
    pub number_alias: Option<Option<String>>,
    pub password: Option<String>,
    pub accountcode: Option<Option<String>>,
    pub effective_caller_id_name: Option<Option<String>>,
    pub effective_caller_id_number: Option<Option<String>>,
    pub outbound_caller_id_name: Option<Option<String>>,
    pub outbound_caller_id_number: Option<Option<String>>,
    pub enabled: Option<bool>,
    pub description: Option<Option<String>>,
}

impl ExtensionChanges {
    /// Whether the changeset touches no attribute.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the present fields to `extension` in place.
    pub fn apply_to(self, extension: &mut Extension) {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut extension.extension, self.extension);
        set(&mut extension.number_alias, self.number_alias);
        set(&mut extension.password, self.password);
        set(&mut extension.accountcode, self.accountcode);
        set(
            &mut extension.effective_caller_id_name,
            self.effective_caller_id_name,
        );
        set(
            &mut extension.effective_caller_id_number,
            self.effective_caller_id_number,
        );
        set(
            &mut extension.outbound_caller_id_name,
            self.outbound_caller_id_name,
        );
        set(
            &mut extension.outbound_caller_id_number,
            self.outbound_caller_id_number,
        );
        set(&mut extension.enabled, self.enabled);
        set(&mut extension.description, self.description);
    }
}

/// Offset pagination window for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a window, substituting defaults for absent values.
    ///
    /// # Examples
    /// ```
    /// use pbx_backend::domain::PageRequest;
    ///
    /// let page = PageRequest::new(None, Some(5));
    /// assert_eq!((page.skip(), page.limit()), (0, 5));
    /// ```
    #[must_use]
    pub fn new(skip: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        }
    }

    /// Number of records to skip.
    #[must_use]
    pub const fn skip(&self) -> u32 {
        self.skip
    }

    /// Maximum number of records to return.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    //! Behavioural coverage for extension value types.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stored() -> Extension {
        let mut draft = ExtensionDraft::new("1001", "secret");
        draft.description = Some("front desk".to_owned());
        draft.accountcode = Some("acct".to_owned());
        draft.into_extension(ExtensionId::random(), DEFAULT_DOMAIN_UUID)
    }

    #[rstest]
    fn draft_materialises_with_assigned_keys() {
        let id = ExtensionId::random();
        let extension = ExtensionDraft::new("1001", "x").into_extension(id, DEFAULT_DOMAIN_UUID);
        assert_eq!(extension.extension_uuid, id);
        assert_eq!(extension.domain_uuid, DEFAULT_DOMAIN_UUID);
        assert!(extension.enabled);
    }

    #[rstest]
    fn default_changes_are_empty() {
        assert!(ExtensionChanges::default().is_empty());
    }

    #[rstest]
    fn clearing_a_field_is_not_empty() {
        let changes = ExtensionChanges {
            description: Some(None),
            ..ExtensionChanges::default()
        };
        assert!(!changes.is_empty());
    }

    #[rstest]
    fn apply_touches_only_present_fields(stored: Extension) {
        let mut updated = stored.clone();
        ExtensionChanges {
            description: Some(Some("lobby".to_owned())),
            accountcode: Some(None),
            ..ExtensionChanges::default()
        }
        .apply_to(&mut updated);

        assert_eq!(updated.description.as_deref(), Some("lobby"));
        assert!(updated.accountcode.is_none());
        assert_eq!(updated.extension, stored.extension);
        assert_eq!(updated.password, stored.password);
        assert_eq!(updated.enabled, stored.enabled);
    }

    #[rstest]
    fn extension_serialises_with_column_names(stored: Extension) {
        let value = serde_json::to_value(&stored).expect("serialise extension");
        assert_eq!(value["extension"], "1001");
        assert_eq!(value["domain_uuid"], DEFAULT_DOMAIN_UUID.to_string());
        assert_eq!(value["extension_uuid"], stored.extension_uuid.to_string());
        assert!(value["number_alias"].is_null());
        assert_eq!(value["enabled"], true);
    }

    #[rstest]
    #[case(None, None, 0, DEFAULT_PAGE_LIMIT)]
    #[case(Some(3), None, 3, DEFAULT_PAGE_LIMIT)]
    #[case(None, Some(0), 0, 0)]
    #[case(Some(10), Some(20), 10, 20)]
    fn page_request_defaults(
        #[case] skip: Option<u32>,
        #[case] limit: Option<u32>,
        #[case] expected_skip: u32,
        #[case] expected_limit: u32,
    ) {
        let page = PageRequest::new(skip, limit);
        assert_eq!(page.skip(), expected_skip);
        assert_eq!(page.limit(), expected_limit);
    }

    #[rstest]
    fn extension_id_rejects_garbage() {
        assert!(ExtensionId::new("not-a-uuid").is_err());
    }
}
