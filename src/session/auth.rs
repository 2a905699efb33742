//! Authentication header derived from the session token.

use super::credentials::SecureString;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization: Bearer` header for a token.
///
/// Returns `None` for an empty token: the header is either meaningful or
/// absent, never sent blank.
pub fn build_auth_header(token: &SecureString) -> Option<AuthHeader> {
    if token.is_empty() {
        return None;
    }
    Some((
        "Authorization".to_string(),
        format!("Bearer {}", token.expose()),
    ))
}
