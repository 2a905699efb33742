//! User-facing notification texts.

use crate::api::ApiError;

pub const LOGIN_SUCCESS: &str = "Signed in successfully";
pub const LOGIN_FAILED: &str = "Authentication failed";
pub const LOGGED_OUT: &str = "You have been signed out";

pub const LOAD_EQUIPMENT_FAILED: &str = "Failed to load equipment";
pub const LOAD_TYPES_FAILED: &str = "Failed to load equipment types";
pub const LOAD_STATS_FAILED: &str = "Failed to load statistics";
pub const PROFILE_FAILED: &str = "Failed to verify the session";

pub const NO_SERIALS: &str = "Enter at least one serial number";
pub const NO_TYPE_SELECTED: &str = "Select an equipment type";
pub const CREATE_SUCCESS: &str = "Equipment added successfully";
pub const CREATE_FAILED: &str = "Failed to add equipment";

pub const UPDATE_SUCCESS: &str = "Equipment updated successfully";
pub const UPDATE_FAILED: &str = "Failed to update equipment";

pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this equipment?";
pub const DELETE_SUCCESS: &str = "Equipment deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete equipment";

pub const RESTORE_SUCCESS: &str = "Equipment restored successfully";
pub const RESTORE_FAILED: &str = "Failed to restore equipment";

/// Server-provided reason, or `fallback`.
pub fn describe_failure(error: &ApiError, fallback: &str) -> String {
    error.server_message().unwrap_or(fallback).to_string()
}

/// Text for a failed batch create.
///
/// Per-serial rejections render one bullet per serial; anything else falls
/// back to the server reason or the generic create failure.
pub fn describe_create_failure(error: &ApiError) -> String {
    let rejected = error.validation_errors();
    if rejected.is_empty() {
        return describe_failure(error, CREATE_FAILED);
    }

    let mut text = String::from("Validation errors:");
    for item in rejected {
        text.push_str("\n• ");
        text.push_str(&item.describe());
    }
    text
}
