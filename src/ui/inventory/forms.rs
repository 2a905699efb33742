//! Form values held between user edits and submission.

use crate::api::{EquipmentQuery, EquipmentRecord};
use crate::session::SecureString;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: SecureString,
}

/// Batch create form. Serial numbers are entered one per line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateForm {
    pub equipment_type: Option<i64>,
    pub serial_numbers_text: String,
    pub note: String,
}

impl CreateForm {
    pub fn serial_numbers(&self) -> Vec<String> {
        parse_serial_numbers(&self.serial_numbers_text)
    }
}

/// Values of the edit dialog. Exists only while the dialog is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub id: i64,
    pub equipment_type: i64,
    pub serial_number: String,
    pub note: String,
}

impl EditForm {
    pub fn from_record(record: &EquipmentRecord) -> Self {
        Self {
            id: record.id,
            equipment_type: record.equipment_type,
            serial_number: record.serial_number.clone(),
            note: record.note.clone().unwrap_or_default(),
        }
    }
}

/// Filters applied to the next list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryFilters {
    pub search_query: String,
    pub selected_type: Option<i64>,
}

impl QueryFilters {
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty() && self.selected_type.is_none()
    }

    /// Query for `page` with these filters.
    pub fn query(&self, page: u32) -> EquipmentQuery {
        EquipmentQuery {
            page,
            search: Some(self.search_query.clone()).filter(|s| !s.is_empty()),
            equipment_type: self.selected_type,
        }
    }
}

/// Split multi-line input into serial numbers.
///
/// Lines are trimmed and blank ones dropped. Order and duplicates are kept;
/// the server decides what a duplicate means.
pub fn parse_serial_numbers(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
