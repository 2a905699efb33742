//! Model-View-Intent (MVI) primitives.
//!
//! This module provides the base traits and the observable store used
//! for unidirectional data flow in the client.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything a view needs
//! - **Intent**: User actions or completed requests
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Holds the current state and notifies subscribers on change

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
