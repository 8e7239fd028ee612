//! Timing tests for the toast host.

use std::time::Duration;

use nexsales_core::models::notification::NewNotification;
use nexsales_store::NotificationStore;
use nexsales_views::{MAX_VISIBLE_TOASTS, ToastHost};
use tokio::time::sleep;

fn is_read(store: &NotificationStore, id: &str) -> bool {
    store
        .notifications()
        .iter()
        .any(|n| n.id == id && n.read)
}

#[tokio::test(start_paused = true)]
async fn toast_is_marked_read_after_display_window() {
    let store = NotificationStore::new();
    let host = ToastHost::follow(store.clone());

    let n = store.add_notification(NewNotification::success("Saved"));
    sleep(Duration::from_millis(4999)).await;
    assert!(!is_read(&store, &n.id));
    assert_eq!(host.visible().len(), 1);

    sleep(Duration::from_millis(2)).await;
    assert!(is_read(&store, &n.id));
    assert!(host.visible().is_empty());
    assert_eq!(host.active_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn at_most_five_toasts_are_shown() {
    let store = NotificationStore::new();
    let host = ToastHost::follow(store.clone());

    let added: Vec<_> = (0..7)
        .map(|i| store.add_notification(NewNotification::info(format!("n{i}"))))
        .collect();
    sleep(Duration::from_millis(1)).await;

    let visible = host.visible();
    assert_eq!(visible.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(visible[0].id, added[6].id);
    assert_eq!(visible[4].id, added[2].id);
    assert_eq!(host.active_timers(), MAX_VISIBLE_TOASTS);
}

#[tokio::test(start_paused = true)]
async fn timer_starts_when_toast_becomes_visible() {
    let store = NotificationStore::new();
    let _host = ToastHost::follow(store.clone());

    let oldest = store.add_notification(NewNotification::info("oldest"));
    let rest: Vec<_> = (0..5)
        .map(|i| store.add_notification(NewNotification::info(format!("n{i}"))))
        .collect();

    // The five newest expire together; only then does the oldest show.
    sleep(Duration::from_millis(5001)).await;
    assert!(rest.iter().all(|n| is_read(&store, &n.id)));
    assert!(!is_read(&store, &oldest.id));

    sleep(Duration::from_millis(4998)).await;
    assert!(!is_read(&store, &oldest.id));

    sleep(Duration::from_millis(3)).await;
    assert!(is_read(&store, &oldest.id));
}

#[tokio::test(start_paused = true)]
async fn pushed_out_toast_gets_a_fresh_window() {
    let store = NotificationStore::new();
    let host = ToastHost::follow(store.clone());

    let first = store.add_notification(NewNotification::info("first"));
    sleep(Duration::from_secs(1)).await;
    for i in 0..5 {
        store.add_notification(NewNotification::info(format!("n{i}")));
    }
    sleep(Duration::from_millis(1)).await;
    assert!(host.visible().iter().all(|n| n.id != first.id));

    // Its original deadline passes without effect.
    sleep(Duration::from_millis(4500)).await;
    assert!(!is_read(&store, &first.id));

    // The five newer ones expire at t=6s, then `first` is back on screen.
    sleep(Duration::from_millis(500)).await;
    assert!(!is_read(&store, &first.id));
    assert_eq!(host.visible()[0].id, first.id);

    sleep(Duration::from_millis(5001)).await;
    assert!(is_read(&store, &first.id));
}

#[tokio::test(start_paused = true)]
async fn dismiss_cancels_timer_and_marks_read() {
    let store = NotificationStore::new();
    let host = ToastHost::follow(store.clone());

    let n = store.add_notification(NewNotification::warning("Low stock"));
    sleep(Duration::from_millis(10)).await;
    assert_eq!(host.active_timers(), 1);

    assert!(host.dismiss(&n.id));
    assert!(is_read(&store, &n.id));
    assert_eq!(host.active_timers(), 0);
    assert!(!host.dismiss(&n.id));
    assert!(!host.dismiss("unknown"));
}

#[tokio::test(start_paused = true)]
async fn dropping_host_cancels_pending_timers() {
    let store = NotificationStore::new();
    let n = store.add_notification(NewNotification::error("Failed"));
    {
        let host = ToastHost::new(store.clone());
        host.sync();
        assert_eq!(host.active_timers(), 1);
    }

    sleep(Duration::from_secs(10)).await;
    assert!(!is_read(&store, &n.id));
}

#[tokio::test(start_paused = true)]
async fn manual_sync_drops_timers_for_cleared_notifications() {
    let store = NotificationStore::new();
    let host = ToastHost::new(store.clone());

    store.add_notification(NewNotification::info("a"));
    host.sync();
    assert_eq!(host.active_timers(), 1);

    store.clear_notifications();
    host.sync();
    assert_eq!(host.active_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn custom_window_is_honoured() {
    let store = NotificationStore::new();
    let host = ToastHost::with_window(store.clone(), Duration::from_millis(500));
    let n = store.add_notification(NewNotification::info("quick"));
    host.sync();

    sleep(Duration::from_millis(501)).await;
    assert!(is_read(&store, &n.id));
}
