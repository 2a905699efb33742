//! Async client for the equipment inventory API.
//!
//! The crate is split the same way the client behaves at runtime:
//!
//! ```text
//! CLI / view ──→ InventoryApp ──→ ApiClient ──→ HTTP API
//!      ↑              │               │
//!      │           Store ◄── reducer  └── SessionContext (token, user)
//!      └── subscribe ─┘
//! ```
//!
//! - [`session`] owns the authenticated identity and its persistence.
//! - [`api`] is the stateless HTTP layer; it reads the auth header from the
//!   injected session context on every request.
//! - [`ui`] holds the reducer-driven view state.
//! - [`app`] is the controller tying the three together.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod mask;
pub mod render;
pub mod session;
pub mod ui;
