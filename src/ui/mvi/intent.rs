//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (form edits, filter changes)
/// - Request outcomes (loaded pages, server errors)
/// - Timer events (notice expiry)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
