//! View state of the inventory client.
//!
//! Everything a front end renders lives in one [`AppState`] value owned by a
//! [`Store`]. Controllers never touch it directly; they dispatch
//! [`AppIntent`]s that [`AppReducer`] folds into the next state.

pub mod format;
pub mod inventory;
pub mod messages;
pub mod mvi;

pub use inventory::{
    parse_serial_numbers, ActiveView, AppIntent, AppReducer, AppState, CreateForm, EditForm,
    LoginForm, Notice, Notifications, QueryFilters,
};
pub use mvi::Store;

/// Store type used by the controller.
pub type AppStore = Store<AppReducer>;
