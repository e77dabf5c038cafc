//! Callback registry notified in registration order, with no replay for
//! late subscribers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use tokio::sync::mpsc;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: AtomicU64,
    entries: Mutex<Vec<(u64, Callback<T>)>>,
}

impl<T> Registry<T> {
    fn entries(&self) -> MutexGuard<'_, Vec<(u64, Callback<T>)>> {
        // callbacks run outside the lock, so a poisoned registry is still consistent
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn remove(&self, id: u64) {
        let removed = {
            let mut entries = self.entries();
            entries
                .iter()
                .position(|(entry_id, _)| *entry_id == id)
                .map(|idx| entries.remove(idx))
        };
        // the callback may own other subscriptions; drop it after unlocking
        drop(removed);
    }
}

/// Owning side of the broadcast: only the holder can notify.
pub struct Observers<T> {
    registry: Arc<Registry<T>>,
}

impl<T: 'static> Observers<T> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry {
                next_id: AtomicU64::new(0),
                entries: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Subscribable handle that cannot notify.
    pub fn listener(&self) -> Listener<T> {
        Listener {
            registry: Arc::clone(&self.registry),
        }
    }

    pub fn notify(&self, value: &T) {
        // snapshot so a callback can (un)subscribe without deadlocking
        let callbacks: Vec<Callback<T>> = self
            .registry
            .entries()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();

        for callback in callbacks {
            callback(value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.entries().len()
    }
}

impl<T: 'static> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Listener<T> {
    registry: Arc<Registry<T>>,
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T: 'static> Listener<T> {
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        let callback: Callback<T> = Arc::new(callback);
        self.registry.entries().push((id, callback));

        let registry: Weak<Registry<T>> = Arc::downgrade(&self.registry);
        Subscription {
            remove: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.remove(id);
                }
            })),
        }
    }
}

impl<T: Clone + Send + 'static> Listener<T> {
    /// Async view of the broadcast. Values are queued without bound until
    /// received.
    pub fn updates(&self) -> Updates<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = self.subscribe(move |value: &T| {
            let _ = tx.send(value.clone());
        });
        Updates {
            rx,
            _subscription: subscription,
        }
    }
}

/// Registration handle. Dropping it deregisters the callback.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    remove: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

pub struct Updates<T> {
    rx: mpsc::UnboundedReceiver<T>,
    _subscription: Subscription,
}

impl<T> Updates<T> {
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}
