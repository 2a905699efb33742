//! Wire types of the inventory API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Authenticated user's profile as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub date_joined: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl UserProfile {
    /// Profile with only the required fields set.
    pub fn named(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: None,
            first_name: None,
            last_name: None,
            is_active: None,
            date_joined: None,
            last_login: None,
        }
    }

    /// "First Last" when known, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.username.clone()
        } else {
            full
        }
    }
}

/// One inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: i64,
    pub equipment_type: i64,
    #[serde(default)]
    pub equipment_type_name: Option<String>,
    #[serde(default)]
    pub equipment_type_mask: Option<String>,
    pub serial_number: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Reference entity every record points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub serial_mask: Option<String>,
    #[serde(default, alias = "count")]
    pub equipment_count: u64,
}

/// Page envelope of list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Page<T> {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            count: self.count,
            next: self.next.clone(),
            previous: self.previous.clone(),
        }
    }
}

/// Position within the paginated equipment list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl Pagination {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// The type list comes back either wrapped in a page or as a bare array,
/// depending on how the server paginates it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeListResponse {
    Paged { results: Vec<EquipmentType> },
    Bare(Vec<EquipmentType>),
}

impl TypeListResponse {
    pub fn into_types(self) -> Vec<EquipmentType> {
        match self {
            TypeListResponse::Paged { results } => results,
            TypeListResponse::Bare(types) => types,
        }
    }
}

/// Query of one equipment page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentQuery {
    pub page: u32,
    pub search: Option<String>,
    pub equipment_type: Option<i64>,
}

impl EquipmentQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            search: None,
            equipment_type: None,
        }
    }

    /// Query parameters in the order they are sent.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string())];
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(equipment_type) = self.equipment_type {
            params.push(("equipment_type", equipment_type.to_string()));
        }
        params
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub tokens: TokenPair,
    pub user: UserProfile,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProfileResponse {
    pub user: UserProfile,
}

/// Batch creation: one type, many serials, one shared note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEquipmentRequest {
    pub equipment_type: i64,
    pub serial_numbers: Vec<String>,
    pub note: String,
}

/// Full replacement of a record's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateEquipmentRequest {
    pub equipment_type: i64,
    pub serial_number: String,
    pub note: String,
}

/// Body of mutation responses; every field is optional and an empty body
/// decodes to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Error body the API sends with non-2xx responses.
///
/// Each field decodes on its own: a field of an unexpected shape reads as
/// absent instead of failing the whole body. Serializer errors arrive with
/// their messages wrapped in lists (`{"error": ["..."]}`), which read as the
/// joined text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub detail: Option<String>,
    #[serde(default, deserialize_with = "lenient_validation_errors")]
    pub validation_errors: Vec<SerialValidationError>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect();
            Some(parts.join(" "))
        }
        _ => None,
    };
    Ok(text.filter(|t| !t.is_empty()))
}

fn lenient_validation_errors<'de, D>(
    deserializer: D,
) -> Result<Vec<SerialValidationError>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Rejection of a single serial in a batch create.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SerialValidationError {
    pub serial_number: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl SerialValidationError {
    /// `"SN1: reason one, reason two"`
    pub fn describe(&self) -> String {
        format!("{}: {}", self.serial_number, self.errors.join(", "))
    }
}

/// Inventory totals from the stats endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EquipmentStats {
    #[serde(default)]
    pub total_equipment: u64,
    #[serde(default)]
    pub total_deleted: u64,
    #[serde(default)]
    pub total_active: u64,
    #[serde(default)]
    pub total_types: u64,
    #[serde(default)]
    pub type_statistics: Vec<TypeStatistic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeStatistic {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub equipment_count: u64,
    #[serde(default)]
    pub serial_mask: Option<String>,
}
