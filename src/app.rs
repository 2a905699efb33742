//! Controller of the inventory client.
//!
//! [`InventoryApp`] turns user actions into API calls and API outcomes into
//! intents for the view store. No operation returns an error: failures end
//! up as notifications or the login error in [`AppState`], and the loading
//! indicator is released on every path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use scopeguard::ScopeGuard;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, CreateEquipmentRequest, EquipmentRecord, UpdateEquipmentRequest};
use crate::config::UiConfig;
use crate::debounce::Debouncer;
use crate::session::{
    forget_session, load_session, save_session, KeyValueStore, SecureString, Session,
    SessionContext,
};
use crate::ui::messages;
use crate::ui::{parse_serial_numbers, ActiveView, AppIntent, AppState, AppStore, QueryFilters};

/// Asks the user to confirm a destructive action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Clone)]
pub struct InventoryApp {
    inner: Arc<AppInner>,
}

struct AppInner {
    api: ApiClient,
    session: SessionContext,
    storage: Arc<dyn KeyValueStore>,
    store: AppStore,
    ui: UiConfig,
    notice_seq: AtomicU64,
    search: Debouncer,
}

impl InventoryApp {
    /// Build a controller around `api`. The session context is the one the
    /// client was constructed with.
    pub fn new(api: ApiClient, storage: Arc<dyn KeyValueStore>, ui: UiConfig) -> Self {
        let session = api.session().clone();
        let search = Debouncer::new(ui.search_debounce());
        Self {
            inner: Arc::new(AppInner {
                api,
                session,
                storage,
                store: AppStore::default(),
                ui,
                notice_seq: AtomicU64::new(0),
                search,
            }),
        }
    }

    pub fn state(&self) -> AppState {
        self.inner.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.store.subscribe()
    }

    pub fn session(&self) -> &SessionContext {
        &self.inner.session
    }

    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Apply a plain state change, such as a form edit.
    pub fn dispatch(&self, intent: AppIntent) {
        self.inner.store.dispatch(intent);
    }

    // ── Session ────────────────────────────────────────────────────────

    /// Adopt a persisted session without loading any data.
    ///
    /// Returns whether a complete session was found.
    pub fn restore_session(&self) -> bool {
        let Some(session) = load_session(self.inner.storage.as_ref()) else {
            debug!("No persisted session");
            return false;
        };

        let user = session.user.clone();
        self.inner.session.adopt(session);
        info!(username = %user.username, "Restored session");
        self.dispatch(AppIntent::SessionStarted { user });
        true
    }

    /// Adopt a persisted session and load the first equipment page and the
    /// type list.
    pub async fn restore(&self) -> bool {
        if !self.restore_session() {
            return false;
        }
        self.load_initial_data().await;
        true
    }

    /// Sign in. Returns whether a session was adopted.
    ///
    /// When logins overlap, each successful response replaces the session
    /// whole, so the last one to arrive wins.
    pub async fn login(&self, username: &str, password: &SecureString) -> bool {
        let _loading = self.loading_guard();
        self.dispatch(AppIntent::LoginSubmitted);

        let response = match self.inner.api.login(username, password).await {
            Ok(response) => response,
            Err(e) => {
                warn!(username, error = %e, error_type = e.error_type(), "Login failed");
                self.dispatch(AppIntent::LoginFailed {
                    message: messages::describe_failure(&e, messages::LOGIN_FAILED),
                });
                return false;
            }
        };

        let session = Session {
            token: SecureString::new(response.tokens.access),
            user: response.user,
        };
        self.inner.session.adopt(session.clone());
        if let Err(e) = save_session(self.inner.storage.as_ref(), &session) {
            warn!(error = %e, "Failed to persist session");
        }

        info!(username = %session.user.username, "Signed in");
        self.dispatch(AppIntent::SessionStarted { user: session.user });
        self.show_success(messages::LOGIN_SUCCESS);

        self.load_initial_data().await;
        true
    }

    /// Sign in with the values of the login form.
    pub async fn submit_login(&self) -> bool {
        let form = self.state().login_form;
        self.login(&form.username, &form.password).await
    }

    /// Sign out and reset the view. Safe to call when already signed out.
    pub fn logout(&self) {
        self.inner.search.cancel();
        let was_signed_in = self.inner.session.clear();

        if let Err(e) = forget_session(self.inner.storage.as_ref()) {
            warn!(error = %e, "Failed to remove persisted session");
        }

        self.dispatch(AppIntent::SessionEnded);
        if was_signed_in {
            info!("Signed out");
            self.show_success(messages::LOGGED_OUT);
        }
    }

    /// Ask the server whether the current token is still accepted and
    /// refresh the profile shown for it.
    pub async fn verify_session(&self) -> bool {
        let _loading = self.loading_guard();
        let generation = self.inner.session.generation();

        let result = self.inner.api.profile().await;
        if self.is_stale(generation, "profile") {
            return false;
        }

        match result {
            Ok(user) => {
                self.dispatch(AppIntent::SessionStarted { user });
                true
            }
            Err(e) => {
                warn!(error = %e, error_type = e.error_type(), "Session verification failed");
                self.show_error(messages::describe_failure(&e, messages::PROFILE_FAILED));
                false
            }
        }
    }

    // ── Listing ────────────────────────────────────────────────────────

    async fn load_initial_data(&self) {
        tokio::join!(self.load_equipment(1), self.load_equipment_types());
    }

    /// Fetch `page` with the current filters.
    pub async fn load_equipment(&self, page: u32) {
        let _loading = self.loading_guard();
        let generation = self.inner.session.generation();
        let query = self.state().filters.query(page);

        let result = self.inner.api.list_equipment(&query).await;
        if self.is_stale(generation, "list equipment") {
            return;
        }

        match result {
            Ok(data) => {
                debug!(page, count = data.count, "Loaded equipment page");
                self.dispatch(AppIntent::EquipmentLoaded { page, data });
            }
            Err(e) => {
                warn!(page, error = %e, error_type = e.error_type(), "Failed to load equipment");
                self.show_error(messages::LOAD_EQUIPMENT_FAILED);
            }
        }
    }

    /// Navigate to `page`. Pages below 1 are ignored.
    pub async fn load_page(&self, page: i64) {
        if page <= 0 {
            return;
        }
        let Ok(page) = u32::try_from(page) else {
            return;
        };
        self.load_equipment(page).await;
    }

    pub async fn load_equipment_types(&self) {
        let generation = self.inner.session.generation();

        let result = self.inner.api.list_equipment_types().await;
        if self.is_stale(generation, "list types") {
            return;
        }

        match result {
            Ok(types) => self.dispatch(AppIntent::TypesLoaded { types }),
            Err(e) => {
                warn!(error = %e, error_type = e.error_type(), "Failed to load equipment types");
                self.show_error(messages::LOAD_TYPES_FAILED);
            }
        }
    }

    pub async fn fetch_stats(&self) {
        let _loading = self.loading_guard();
        let generation = self.inner.session.generation();

        let result = self.inner.api.equipment_stats().await;
        if self.is_stale(generation, "stats") {
            return;
        }

        match result {
            Ok(stats) => self.dispatch(AppIntent::StatsLoaded { stats }),
            Err(e) => {
                warn!(error = %e, error_type = e.error_type(), "Failed to load statistics");
                self.show_error(messages::LOAD_STATS_FAILED);
            }
        }
    }

    // ── Filters ────────────────────────────────────────────────────────

    /// Update the search text and refetch page 1 once typing pauses.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.dispatch(AppIntent::SearchChanged {
            query: query.into(),
        });

        let weak = Arc::downgrade(&self.inner);
        self.inner.search.schedule(async move {
            if let Some(app) = upgrade(&weak) {
                app.load_equipment(1).await;
            }
        });
    }

    /// Change the type filter and refetch page 1 right away.
    pub async fn set_type_filter(&self, equipment_type: Option<i64>) {
        self.inner.search.cancel();
        self.dispatch(AppIntent::TypeFilterChanged { equipment_type });
        self.load_equipment(1).await;
    }

    /// Replace both filters and refetch page 1 right away.
    pub async fn set_filters(&self, filters: QueryFilters) {
        self.inner.search.cancel();
        self.dispatch(AppIntent::FiltersSet { filters });
        self.load_equipment(1).await;
    }

    pub async fn clear_filters(&self) {
        self.inner.search.cancel();
        self.dispatch(AppIntent::FiltersCleared);
        self.load_equipment(1).await;
    }

    // ── Mutations ──────────────────────────────────────────────────────

    /// Create one record per non-blank line of `serial_numbers_text`.
    pub async fn create_equipment(
        &self,
        equipment_type: Option<i64>,
        serial_numbers_text: &str,
        note: &str,
    ) -> bool {
        let _loading = self.loading_guard();
        self.dispatch(AppIntent::ClearMessages);

        let serial_numbers = parse_serial_numbers(serial_numbers_text);
        if serial_numbers.is_empty() {
            self.show_error(messages::NO_SERIALS);
            return false;
        }
        let Some(equipment_type) = equipment_type else {
            self.show_error(messages::NO_TYPE_SELECTED);
            return false;
        };

        let request = CreateEquipmentRequest {
            equipment_type,
            serial_numbers,
            note: note.to_string(),
        };
        let generation = self.inner.session.generation();

        let result = self.inner.api.create_equipment(&request).await;
        if self.is_stale(generation, "create equipment") {
            return false;
        }

        match result {
            Ok(response) => {
                info!(
                    equipment_type,
                    count = request.serial_numbers.len(),
                    "Created equipment"
                );
                let text = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| messages::CREATE_SUCCESS.to_string());
                self.show_success(text);
                self.dispatch(AppIntent::CreateFormReset);
                self.dispatch(AppIntent::ShowView {
                    view: ActiveView::List,
                });
                self.refresh_all().await;
                true
            }
            Err(e) => {
                warn!(error = %e, error_type = e.error_type(), "Failed to create equipment");
                self.show_error(messages::describe_create_failure(&e));
                false
            }
        }
    }

    /// Create equipment from the values of the create form.
    pub async fn submit_create_form(&self) -> bool {
        let form = self.state().create_form;
        self.create_equipment(form.equipment_type, &form.serial_numbers_text, &form.note)
            .await
    }

    /// Replace all editable fields of record `id`.
    pub async fn update_equipment(
        &self,
        id: i64,
        equipment_type: i64,
        serial_number: &str,
        note: &str,
    ) -> bool {
        let _loading = self.loading_guard();
        self.dispatch(AppIntent::ClearMessages);

        let request = UpdateEquipmentRequest {
            equipment_type,
            serial_number: serial_number.to_string(),
            note: note.to_string(),
        };
        let generation = self.inner.session.generation();

        let result = self.inner.api.update_equipment(id, &request).await;
        if self.is_stale(generation, "update equipment") {
            return false;
        }

        match result {
            Ok(_) => {
                info!(id, "Updated equipment");
                self.show_success(messages::UPDATE_SUCCESS);
                self.dispatch(AppIntent::CloseEdit);
                self.load_equipment(1).await;
                true
            }
            Err(e) => {
                warn!(id, error = %e, error_type = e.error_type(), "Failed to update equipment");
                self.show_error(messages::describe_failure(&e, messages::UPDATE_FAILED));
                false
            }
        }
    }

    /// Save the open edit dialog. Does nothing if it is closed.
    pub async fn submit_edit_form(&self) -> bool {
        let Some(form) = self.state().edit_form else {
            return false;
        };
        self.update_equipment(form.id, form.equipment_type, &form.serial_number, &form.note)
            .await
    }

    /// Delete record `id` after `confirm` agrees. A declined confirmation
    /// sends nothing and changes nothing.
    pub async fn delete_equipment(&self, id: i64, confirm: &dyn Confirm) -> bool {
        if !confirm.confirm(messages::DELETE_CONFIRM) {
            debug!(id, "Delete declined");
            return false;
        }

        let _loading = self.loading_guard();
        self.dispatch(AppIntent::ClearMessages);
        let generation = self.inner.session.generation();

        let result = self.inner.api.delete_equipment(id).await;
        if self.is_stale(generation, "delete equipment") {
            return false;
        }

        match result {
            Ok(_) => {
                info!(id, "Deleted equipment");
                self.show_success(messages::DELETE_SUCCESS);
                self.refresh_all().await;
                true
            }
            Err(e) => {
                warn!(id, error = %e, error_type = e.error_type(), "Failed to delete equipment");
                self.show_error(messages::describe_failure(&e, messages::DELETE_FAILED));
                false
            }
        }
    }

    /// Bring back a soft-deleted record.
    pub async fn restore_equipment(&self, id: i64) -> bool {
        let _loading = self.loading_guard();
        self.dispatch(AppIntent::ClearMessages);
        let generation = self.inner.session.generation();

        let result = self.inner.api.restore_equipment(id).await;
        if self.is_stale(generation, "restore equipment") {
            return false;
        }

        match result {
            Ok(response) => {
                info!(id, "Restored equipment");
                let text = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| messages::RESTORE_SUCCESS.to_string());
                self.show_success(text);
                self.refresh_all().await;
                true
            }
            Err(e) => {
                warn!(id, error = %e, error_type = e.error_type(), "Failed to restore equipment");
                self.show_error(messages::describe_failure(&e, messages::RESTORE_FAILED));
                false
            }
        }
    }

    /// Page 1 and the type list; type counts change with every mutation.
    async fn refresh_all(&self) {
        tokio::join!(self.load_equipment(1), self.load_equipment_types());
    }

    // ── Dialogs and views ──────────────────────────────────────────────

    /// Open the edit dialog pre-filled from `record`.
    pub fn open_edit(&self, record: EquipmentRecord) {
        self.dispatch(AppIntent::OpenEdit { record });
    }

    pub fn close_edit(&self) {
        self.dispatch(AppIntent::CloseEdit);
    }

    pub fn show_view(&self, view: ActiveView) {
        self.dispatch(AppIntent::ShowView { view });
    }

    // ── Notifications ──────────────────────────────────────────────────

    /// Show a success notice that expires after the configured window.
    /// Returns the notice id.
    pub fn show_success(&self, text: impl Into<String>) -> u64 {
        let id = self.next_notice_id();
        self.dispatch(AppIntent::ShowSuccess {
            id,
            text: text.into(),
        });
        self.schedule_dismiss(id, self.inner.ui.success_notice());
        id
    }

    /// Show an error notice that expires after the configured window.
    /// Returns the notice id.
    pub fn show_error(&self, text: impl Into<String>) -> u64 {
        let id = self.next_notice_id();
        self.dispatch(AppIntent::ShowError {
            id,
            text: text.into(),
        });
        self.schedule_dismiss(id, self.inner.ui.error_notice());
        id
    }

    pub fn clear_messages(&self) {
        self.dispatch(AppIntent::ClearMessages);
    }

    fn next_notice_id(&self) -> u64 {
        self.inner.notice_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Outside a runtime the notice simply stays until replaced.
    fn schedule_dismiss(&self, id: u64, after: Duration) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let weak = Arc::downgrade(&self.inner);
        handle.spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(inner) = weak.upgrade() {
                inner.store.dispatch(AppIntent::DismissNotice { id });
            }
        });
    }

    // ── Helpers ────────────────────────────────────────────────────────

    fn loading_guard(&self) -> ScopeGuard<(), impl FnOnce(()) + '_> {
        self.dispatch(AppIntent::RequestStarted);
        scopeguard::guard((), move |_| {
            self.dispatch(AppIntent::RequestFinished);
        })
    }

    fn is_stale(&self, generation: u64, operation: &str) -> bool {
        let stale = !self.inner.session.is_current(generation);
        if stale {
            debug!(operation, "Discarding response from a previous session");
        }
        stale
    }
}

fn upgrade(weak: &Weak<AppInner>) -> Option<InventoryApp> {
    weak.upgrade().map(|inner| InventoryApp { inner })
}
