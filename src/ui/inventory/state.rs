//! State of the inventory screen.

use crate::api::{EquipmentRecord, EquipmentStats, EquipmentType, Pagination, UserProfile};
use crate::mask::mismatched_serials;
use crate::ui::mvi::UiState;

use super::forms::{CreateForm, EditForm, LoginForm, QueryFilters};

/// A transient message. The id lets an expiry timer clear exactly the
/// notice it was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// At most one success and one error notice; showing one hides the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notifications {
    pub success: Option<Notice>,
    pub error: Option<Notice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    List,
    Add,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    /// Requests currently in flight that show the loading indicator.
    pub pending_requests: u32,
    pub notices: Notifications,
    /// Shown next to the login form only.
    pub login_error: Option<String>,
    pub active_view: ActiveView,
    pub login_form: LoginForm,
    pub create_form: CreateForm,
    /// `Some` while the edit dialog is open.
    pub edit_form: Option<EditForm>,
    pub equipment: Vec<EquipmentRecord>,
    pub equipment_types: Vec<EquipmentType>,
    pub filters: QueryFilters,
    pub current_page: u32,
    pub pagination: Pagination,
    pub stats: Option<EquipmentStats>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            pending_requests: 0,
            notices: Notifications::default(),
            login_error: None,
            active_view: ActiveView::default(),
            login_form: LoginForm::default(),
            create_form: CreateForm::default(),
            edit_form: None,
            equipment: Vec::new(),
            equipment_types: Vec::new(),
            filters: QueryFilters::default(),
            current_page: 1,
            pagination: Pagination::default(),
            stats: None,
        }
    }
}

impl UiState for AppState {}

impl AppState {
    pub fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn success_message(&self) -> Option<&str> {
        self.notices.success.as_ref().map(|n| n.text.as_str())
    }

    pub fn error_message(&self) -> Option<&str> {
        self.notices.error.as_ref().map(|n| n.text.as_str())
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit_form.is_some()
    }

    /// Type record for `id`, if loaded.
    pub fn equipment_type(&self, id: i64) -> Option<&EquipmentType> {
        self.equipment_types.iter().find(|t| t.id == id)
    }

    /// Serials in the create form that do not fit the selected type's mask.
    ///
    /// Advisory only; submission sends the serials unchanged.
    pub fn mask_mismatches(&self) -> Vec<String> {
        let mask = self
            .create_form
            .equipment_type
            .and_then(|id| self.equipment_type(id))
            .and_then(|t| t.serial_mask.as_deref());
        let Some(mask) = mask else {
            return Vec::new();
        };

        let serials = self.create_form.serial_numbers();
        mismatched_serials(mask, &serials)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
