//! Observable collection state for one screen.
//!
//! # Design
//! `CollectionStore` is the only writer and is deliberately not `Clone`;
//! readers hold a `CollectionView`, which wraps a `watch::Receiver` and is
//! woken on every write. Records live behind an `Arc<[R]>` so snapshots are
//! cheap to hand out.
//!
//! A failed fetch changes only the status. Records from the last successful
//! fetch stay visible, and a successful fetch replaces them wholesale.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::FetchError;
use crate::types::Record;

/// Where the most recent fetch stands.
#[derive(Debug, Clone)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(Arc<FetchError>),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadStatus::Failed(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// Point-in-time copy of a store's contents.
pub struct Snapshot<R> {
    pub records: Arc<[R]>,
    pub status: LoadStatus,
}

impl<R> Clone for Snapshot<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            status: self.status.clone(),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Snapshot<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("records", &self.records)
            .field("status", &self.status)
            .finish()
    }
}

impl<R> Snapshot<R> {
    fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            status: LoadStatus::Idle,
        }
    }
}

/// Single writer for a screen's collection.
pub struct CollectionStore<R> {
    tx: watch::Sender<Snapshot<R>>,
}

impl<R: Record> Default for CollectionStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> CollectionStore<R> {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Snapshot::empty());
        Self { tx }
    }

    /// A new reader subscribed to this store.
    pub fn view(&self) -> CollectionView<R> {
        CollectionView {
            rx: self.tx.subscribe(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<R> {
        self.tx.borrow().clone()
    }

    pub fn mark_loading(&mut self) {
        self.tx.send_modify(|snapshot| snapshot.status = LoadStatus::Loading);
    }

    /// Replace the records and mark the store loaded.
    pub fn publish(&mut self, records: Vec<R>) {
        self.tx.send_replace(Snapshot {
            records: Arc::from(records),
            status: LoadStatus::Loaded,
        });
    }

    /// Record a failure. The current records are left untouched.
    pub fn fail(&mut self, err: Arc<FetchError>) {
        self.tx.send_modify(|snapshot| snapshot.status = LoadStatus::Failed(err));
    }
}

/// Cloneable read handle onto a `CollectionStore`.
pub struct CollectionView<R> {
    rx: watch::Receiver<Snapshot<R>>,
}

impl<R> Clone for CollectionView<R> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}

impl<R: Record + Clone> CollectionView<R> {
    pub fn snapshot(&self) -> Snapshot<R> {
        self.rx.borrow().clone()
    }

    pub fn records(&self) -> Arc<[R]> {
        Arc::clone(&self.rx.borrow().records)
    }

    pub fn status(&self) -> LoadStatus {
        self.rx.borrow().status.clone()
    }

    /// Look up a single record for a detail view.
    pub fn get(&self, id: i64) -> Option<R> {
        self.rx.borrow().records.iter().find(|r| r.id() == id).cloned()
    }

    /// Wait for the next write. Returns `false` once the store is dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
