//! Inventory screen feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state
//! - `forms.rs` - Login, create and edit form values
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions

mod forms;
mod intent;
mod reducer;
mod state;

pub use forms::{parse_serial_numbers, CreateForm, EditForm, LoginForm, QueryFilters};
pub use intent::AppIntent;
pub use reducer::AppReducer;
pub use state::{ActiveView, AppState, Notice, Notifications};
