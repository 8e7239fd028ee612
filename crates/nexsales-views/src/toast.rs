//! On-screen notification toasts with auto-dismiss timers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use nexsales_core::models::notification::Notification;
use nexsales_store::NotificationStore;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Most toasts on screen at once.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// How long a toast stays up before it is marked read.
pub const TOAST_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

/// Unread notifications, newest first, capped at [`MAX_VISIBLE_TOASTS`].
pub fn visible_toasts(notifications: &[Notification]) -> Vec<Notification> {
    notifications
        .iter()
        .filter(|n| !n.read)
        .take(MAX_VISIBLE_TOASTS)
        .cloned()
        .collect()
}

type Timers = Arc<Mutex<HashMap<String, JoinHandle<()>>>>;

fn lock(timers: &Timers) -> MutexGuard<'_, HashMap<String, JoinHandle<()>>> {
    timers.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Renders the visible toasts and owns one timer per visible entry.
///
/// A timer starts when its notification enters the visible set and
/// marks it read after the display window. It is cancelled when the
/// entry leaves the set early, when the toast is dismissed, or when the
/// host is dropped, so no timer ever fires for an id that is gone or
/// already read.
pub struct ToastHost {
    store: NotificationStore,
    window: Duration,
    timers: Timers,
    follower: Option<JoinHandle<()>>,
}

impl ToastHost {
    /// A host that only re-syncs when [`sync`](Self::sync) is called.
    pub fn new(store: NotificationStore) -> Self {
        Self::with_window(store, TOAST_DISPLAY_WINDOW)
    }

    pub fn with_window(store: NotificationStore, window: Duration) -> Self {
        Self {
            store,
            window,
            timers: Arc::new(Mutex::new(HashMap::new())),
            follower: None,
        }
    }

    /// A host that re-syncs on every notification store change.
    pub fn follow(store: NotificationStore) -> Self {
        let mut host = Self::new(store);
        host.start_following();
        host
    }

    /// Spawn the loop that keeps timers aligned with the store. Calling
    /// it again restarts the loop.
    pub fn start_following(&mut self) {
        if let Some(previous) = self.follower.take() {
            previous.abort();
        }

        let store = self.store.clone();
        let timers = Arc::clone(&self.timers);
        let window = self.window;
        let mut rx = store.subscribe();

        self.follower = Some(tokio::spawn(async move {
            sync_timers(&store, &timers, window);
            while rx.changed().await.is_ok() {
                sync_timers(&store, &timers, window);
            }
        }));
    }

    pub fn visible(&self) -> Vec<Notification> {
        visible_toasts(&self.store.notifications())
    }

    /// Start timers for newly visible toasts and cancel those for
    /// toasts no longer visible.
    pub fn sync(&self) {
        sync_timers(&self.store, &self.timers, self.window);
    }

    /// Close a toast now: cancel its timer and mark it read.
    pub fn dismiss(&self, id: &str) -> bool {
        if let Some(timer) = lock(&self.timers).remove(id) {
            timer.abort();
        }
        let marked = self.store.mark_as_read(id);
        debug!(id, marked, "Dismissed toast");
        marked
    }

    /// Number of timers currently waiting to fire.
    pub fn active_timers(&self) -> usize {
        lock(&self.timers)
            .values()
            .filter(|t| !t.is_finished())
            .count()
    }
}

impl Drop for ToastHost {
    fn drop(&mut self) {
        if let Some(follower) = self.follower.take() {
            follower.abort();
        }
        for (_, timer) in lock(&self.timers).drain() {
            timer.abort();
        }
    }
}

fn sync_timers(store: &NotificationStore, timers: &Timers, window: Duration) {
    let visible: Vec<String> = visible_toasts(&store.notifications())
        .into_iter()
        .map(|n| n.id)
        .collect();
    let mut map = lock(timers);

    map.retain(|id, timer| {
        let keep = visible.contains(id) && !timer.is_finished();
        if !keep {
            timer.abort();
            trace!(id = %id, "Cancelled toast timer");
        }
        keep
    });

    for id in visible {
        if map.contains_key(&id) {
            continue;
        }
        let store = store.clone();
        let owner = Arc::clone(timers);
        let key = id.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            store.mark_as_read(&key);
            lock(&owner).remove(&key);
            trace!(id = %key, "Toast expired");
        });
        map.insert(id, timer);
    }
}
