//! Reducer for the inventory screen.

use crate::ui::mvi::Reducer;

use super::forms::{CreateForm, EditForm, LoginForm, QueryFilters};
use super::intent::AppIntent;
use super::state::{AppState, Notice};

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            AppIntent::SessionStarted { user } => {
                state.user = Some(user);
                state.is_authenticated = true;
                state.login_error = None;
                state.login_form = LoginForm::default();
            }

            AppIntent::SessionEnded => {
                // Requests still in flight keep their loading slot until they
                // resolve. Notices expire on their own timers.
                state = AppState {
                    pending_requests: state.pending_requests,
                    notices: state.notices,
                    ..AppState::default()
                };
            }

            AppIntent::LoginSubmitted => state.login_error = None,

            AppIntent::LoginFailed { message } => {
                state.login_error = Some(message);
                state.login_form.password = Default::default();
            }

            AppIntent::RequestStarted => state.pending_requests += 1,
            AppIntent::RequestFinished => {
                state.pending_requests = state.pending_requests.saturating_sub(1)
            }

            AppIntent::ShowSuccess { id, text } => {
                state.notices.success = Some(Notice { id, text });
                state.notices.error = None;
            }
            AppIntent::ShowError { id, text } => {
                state.notices.error = Some(Notice { id, text });
                state.notices.success = None;
            }
            AppIntent::DismissNotice { id } => {
                if state.notices.success.as_ref().is_some_and(|n| n.id == id) {
                    state.notices.success = None;
                }
                if state.notices.error.as_ref().is_some_and(|n| n.id == id) {
                    state.notices.error = None;
                }
            }
            AppIntent::ClearMessages => {
                state.notices = Default::default();
                state.login_error = None;
            }

            AppIntent::EquipmentLoaded { page, data } => {
                state.pagination = data.pagination();
                state.equipment = data.results;
                state.current_page = page;
            }
            AppIntent::TypesLoaded { types } => state.equipment_types = types,
            AppIntent::StatsLoaded { stats } => state.stats = Some(stats),

            AppIntent::SearchChanged { query } => state.filters.search_query = query,
            AppIntent::TypeFilterChanged { equipment_type } => {
                state.filters.selected_type = equipment_type
            }
            AppIntent::FiltersSet { filters } => state.filters = filters,
            AppIntent::FiltersCleared => state.filters = QueryFilters::default(),

            AppIntent::UsernameChanged { username } => state.login_form.username = username,
            AppIntent::PasswordChanged { password } => state.login_form.password = password,

            AppIntent::CreateTypeSelected { equipment_type } => {
                state.create_form.equipment_type = equipment_type
            }
            AppIntent::CreateSerialsChanged { text } => {
                state.create_form.serial_numbers_text = text
            }
            AppIntent::CreateNoteChanged { note } => state.create_form.note = note,
            AppIntent::CreateFormReset => state.create_form = CreateForm::default(),

            AppIntent::OpenEdit { record } => {
                state.edit_form = Some(EditForm::from_record(&record));
            }
            AppIntent::EditTypeChanged { equipment_type } => {
                if let Some(form) = state.edit_form.as_mut() {
                    form.equipment_type = equipment_type;
                }
            }
            AppIntent::EditSerialChanged { serial_number } => {
                if let Some(form) = state.edit_form.as_mut() {
                    form.serial_number = serial_number;
                }
            }
            AppIntent::EditNoteChanged { note } => {
                if let Some(form) = state.edit_form.as_mut() {
                    form.note = note;
                }
            }
            AppIntent::CloseEdit => state.edit_form = None,

            AppIntent::ShowView { view } => state.active_view = view,
        }
        state
    }
}
