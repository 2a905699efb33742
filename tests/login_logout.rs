//! Login, logout and session replacement.

mod common;

use std::time::Duration;

use common::{login_body, page_json, Harness, MockResponse};
use inventory_client::session::{KeyValueStore, SecureString, ACCESS_TOKEN_KEY, USER_KEY};
use inventory_client::ui::messages;

#[tokio::test]
async fn test_login_success_persists_and_loads() {
    let h = Harness::start().await;
    h.api
        .enqueue(
            "POST /user/login/",
            MockResponse::json(&login_body("token-a", "alice")),
        )
        .await;
    h.api
        .enqueue(
            "GET /equipment/",
            MockResponse::json(&page_json(&[(1, "A1")], 1, false, false)),
        )
        .await;

    assert!(h.app.login("alice", &SecureString::new("secret")).await);

    let login = &h.api.requests_to("POST /user/login/").await[0];
    assert_eq!(
        login.json(),
        serde_json::json!({"username": "alice", "password": "secret"})
    );
    assert_eq!(login.header("authorization"), None);

    let state = h.state();
    assert!(state.is_authenticated);
    assert_eq!(state.login_error, None);
    assert_eq!(state.success_message(), Some(messages::LOGIN_SUCCESS));
    assert_eq!(state.equipment.len(), 1);
    assert!(!state.is_loading());
    assert_eq!(state.login_form.password, SecureString::default());

    assert_eq!(h.storage.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("token-a"));
    assert!(h.storage.get(USER_KEY).unwrap().is_some());

    let list = &h.api.requests_to("GET /equipment/").await[0];
    assert_eq!(list.header("authorization"), Some("Bearer token-a"));
}

#[tokio::test]
async fn test_login_failure_sets_login_error_only() {
    let h = Harness::start().await;
    h.api
        .enqueue(
            "POST /user/login/",
            MockResponse::error(401, "Invalid credentials"),
        )
        .await;

    assert!(!h.app.login("alice", &SecureString::new("wrong")).await);

    let state = h.state();
    assert!(!state.is_authenticated);
    assert_eq!(state.login_error.as_deref(), Some("Invalid credentials"));
    assert_eq!(state.error_message(), None);
    assert_eq!(state.success_message(), None);
    assert!(!state.is_loading());
    assert!(h.storage.is_empty());
    assert_eq!(h.api.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn test_login_failure_falls_back_to_detail_then_generic() {
    let h = Harness::start().await;
    h.api
        .enqueue(
            "POST /user/login/",
            MockResponse::status(400, r#"{"detail":"Account disabled"}"#),
        )
        .await;
    h.api
        .enqueue("POST /user/login/", MockResponse::status(500, ""))
        .await;

    h.app.login("alice", &SecureString::new("pw")).await;
    assert_eq!(h.state().login_error.as_deref(), Some("Account disabled"));

    h.app.login("alice", &SecureString::new("pw")).await;
    assert_eq!(h.state().login_error.as_deref(), Some(messages::LOGIN_FAILED));
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let h = Harness::signed_in().await;
    assert!(h.app.restore_session());
    h.api
        .enqueue("POST /user/login/", MockResponse::error(401, "nope"))
        .await;

    h.app.login("mallory", &SecureString::new("x")).await;

    let state = h.state();
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("alice"));
    assert_eq!(
        h.app.session().auth_header().map(|(_, v)| v),
        Some("Bearer stored-token".to_string())
    );
}

#[tokio::test]
async fn test_submit_login_uses_form_values() {
    let h = Harness::start().await;
    h.api
        .enqueue("POST /user/login/", MockResponse::json(&login_body("t", "dave")))
        .await;
    h.app.dispatch(inventory_client::ui::AppIntent::UsernameChanged {
        username: "dave".into(),
    });
    h.app.dispatch(inventory_client::ui::AppIntent::PasswordChanged {
        password: SecureString::new("pw"),
    });

    assert!(h.app.submit_login().await);

    let login = &h.api.requests_to("POST /user/login/").await[0];
    assert_eq!(login.json()["username"], "dave");
    assert_eq!(login.json()["password"], "pw");
    assert_eq!(h.state().login_form.username, "");
}

#[tokio::test]
async fn test_logout_clears_everything_and_is_idempotent() {
    let h = Harness::signed_in().await;
    h.api
        .enqueue(
            "GET /equipment/",
            MockResponse::json(&page_json(&[(1, "A1")], 1, false, false)),
        )
        .await;
    assert!(h.app.restore().await);
    assert_eq!(h.state().equipment.len(), 1);

    h.app.logout();

    let state = h.state();
    assert!(!state.is_authenticated);
    assert_eq!(state.user, None);
    assert!(state.equipment.is_empty());
    assert!(state.equipment_types.is_empty());
    assert_eq!(state.success_message(), Some(messages::LOGGED_OUT));
    assert!(h.app.session().auth_header().is_none());
    assert!(h.storage.is_empty());

    h.app.logout();
    assert_eq!(h.state(), state);
}

#[tokio::test]
async fn test_requests_after_logout_carry_no_header() {
    let h = Harness::signed_in().await;
    assert!(h.app.restore_session());
    h.app.logout();

    h.app.load_equipment(1).await;

    let list = &h.api.requests_to("GET /equipment/").await[0];
    assert_eq!(list.header("authorization"), None);
}

#[tokio::test]
async fn test_response_after_logout_is_discarded() {
    let h = Harness::signed_in().await;
    assert!(h.app.restore_session());
    h.api
        .enqueue(
            "GET /equipment/",
            MockResponse::json(&page_json(&[(1, "LATE")], 1, false, false)).with_delay(300),
        )
        .await;

    let app = h.app.clone();
    let pending = tokio::spawn(async move { app.load_equipment(1).await });
    tokio::time::sleep(Duration::from_millis(100)).await;
    h.app.logout();
    pending.await.unwrap();

    let state = h.state();
    assert!(!state.is_authenticated);
    assert!(state.equipment.is_empty());
    assert_eq!(state.error_message(), None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_overlapping_logins_never_tear_the_session() {
    let h = Harness::start().await;
    h.api
        .enqueue(
            "POST /user/login/",
            MockResponse::json(&login_body("token-a", "alice")).with_delay(300),
        )
        .await;
    h.api
        .enqueue(
            "POST /user/login/",
            MockResponse::json(&login_body("token-b", "bob")),
        )
        .await;

    let first_password = SecureString::new("a");
    let (first, second) = tokio::join!(
        h.app.login("alice", &first_password),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            h.app.login("bob", &SecureString::new("b")).await
        }
    );
    assert!(first && second);

    // The slower response arrived last and owns the whole session
    let session = h.app.session().current().unwrap();
    assert_eq!(session.token.expose(), "token-a");
    assert_eq!(session.user.username, "alice");
    assert_eq!(
        h.state().user.map(|u| u.username),
        Some("alice".to_string())
    );
    assert_eq!(h.storage.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("token-a"));
}
