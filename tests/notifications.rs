//! Notification lifetimes.

mod common;

use std::time::Duration;

use common::{fast_notices, Harness};

#[tokio::test]
async fn test_success_expires_after_its_window() {
    let h = Harness::start_with(fast_notices()).await;

    h.app.show_success("Saved");
    assert_eq!(h.state().success_message(), Some("Saved"));

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(h.state().success_message(), None);
}

#[tokio::test]
async fn test_error_replaces_success_and_outlives_it() {
    let h = Harness::start_with(fast_notices()).await;

    h.app.show_success("Saved");
    h.app.show_error("Failed");
    assert_eq!(h.state().success_message(), None);
    assert_eq!(h.state().error_message(), Some("Failed"));

    // Past the success window, inside the error window
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(h.state().error_message(), Some("Failed"));

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(h.state().error_message(), None);
}

#[tokio::test]
async fn test_newer_notice_restarts_the_window() {
    let h = Harness::start_with(fast_notices()).await;

    h.app.show_success("first");
    tokio::time::sleep(Duration::from_millis(100)).await;
    h.app.show_success("second");

    // The first timer fires here but must not clear the second notice
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(h.state().success_message(), Some("second"));

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(h.state().success_message(), None);
}

#[tokio::test]
async fn test_subscribers_are_notified() {
    let h = Harness::start_with(fast_notices()).await;
    let mut rx = h.app.subscribe();

    h.app.show_error("Failed");
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().error_message(), Some("Failed"));

    tokio::time::timeout(Duration::from_secs(1), rx.changed())
        .await
        .expect("expiry was not published")
        .unwrap();
    assert_eq!(rx.borrow().error_message(), None);
}

#[tokio::test]
async fn test_clear_messages_drops_both() {
    let h = Harness::start().await;
    h.app.show_error("Failed");
    h.app.clear_messages();

    let state = h.state();
    assert_eq!(state.error_message(), None);
    assert_eq!(state.success_message(), None);
    assert_eq!(state.login_error, None);
}
