//! Intents for the inventory screen.

use crate::api::{EquipmentRecord, EquipmentStats, EquipmentType, Page, UserProfile};
use crate::session::SecureString;
use crate::ui::mvi::Intent;

use super::forms::QueryFilters;
use super::state::ActiveView;

#[derive(Debug, Clone)]
pub enum AppIntent {
    // Session
    /// A session was adopted (restored or freshly logged in).
    SessionStarted { user: UserProfile },
    /// Logout: everything returns to the signed-out default.
    SessionEnded,
    LoginSubmitted,
    LoginFailed { message: String },

    // Loading indicator
    RequestStarted,
    RequestFinished,

    // Notifications
    ShowSuccess { id: u64, text: String },
    ShowError { id: u64, text: String },
    /// Expiry of the notice with this id. Ignored if it was replaced.
    DismissNotice { id: u64 },
    /// Clears both notices and the login error.
    ClearMessages,

    // Loaded data
    EquipmentLoaded { page: u32, data: Page<EquipmentRecord> },
    TypesLoaded { types: Vec<EquipmentType> },
    StatsLoaded { stats: EquipmentStats },

    // Filters
    SearchChanged { query: String },
    TypeFilterChanged { equipment_type: Option<i64> },
    FiltersSet { filters: QueryFilters },
    FiltersCleared,

    // Login form
    UsernameChanged { username: String },
    PasswordChanged { password: SecureString },

    // Create form
    CreateTypeSelected { equipment_type: Option<i64> },
    CreateSerialsChanged { text: String },
    CreateNoteChanged { note: String },
    CreateFormReset,

    // Edit dialog
    OpenEdit { record: EquipmentRecord },
    EditTypeChanged { equipment_type: i64 },
    EditSerialChanged { serial_number: String },
    EditNoteChanged { note: String },
    CloseEdit,

    ShowView { view: ActiveView },
}

impl Intent for AppIntent {}
