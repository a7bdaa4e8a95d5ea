//! Observable values shared between the stores and their consumers.
//!
//! Every store publishes its state through an [`Observable`], a thin wrapper
//! around a `tokio::sync::watch` channel. Writes always replace (or filter)
//! the whole value, so a reader holding a snapshot never sees a torn list.

use crate::models::Photo;
use std::sync::Arc;
use tokio::sync::watch;

/// A value that can be read, replaced and subscribed to
#[derive(Debug)]
pub struct Observable<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Derives the next value from the current one
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.tx.send_modify(|current| {
            let next = f(current);
            *current = next;
        });
    }

    /// Receiver that observes every later change
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Published state of the photo pipeline.
///
/// Cheap to clone; clones share the same underlying channels, so it can be
/// handed to every component that needs to render or react to photos.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    /// Most recent upload first
    pub photos: Observable<Vec<Photo>>,
    /// 0-100, 0 when idle
    pub upload_progress: Observable<f64>,
    pub is_initialized: Observable<bool>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_update() {
        let value = Observable::new(vec![1, 2, 3]);
        value.update(|v| v.iter().copied().filter(|n| *n != 2).collect());
        assert_eq!(value.get(), vec![1, 3]);

        value.set(Vec::new());
        assert!(value.get().is_empty());
    }

    #[tokio::test]
    async fn test_subscriber_sees_changes() {
        let value = Observable::new(0.0_f64);
        let mut rx = value.subscribe();

        value.set(42.0);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 42.0);
    }

    #[test]
    fn test_clones_share_state() {
        let state = GalleryState::new();
        let other = state.clone();
        other.is_initialized.set(true);
        assert!(state.is_initialized.get());
    }
}
