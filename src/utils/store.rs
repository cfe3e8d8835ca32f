use tokio::sync::{Mutex, MutexGuard};

/// A record kept in one of the in-memory stores.
pub trait Record: Clone + Send + Sync + 'static {
    /// Resource name used in client-facing messages, e.g. `"Dish"`.
    const RESOURCE: &'static str;

    fn id(&self) -> &str;
}

/// Insertion-ordered sequence of records for one resource, unique by id.
///
/// Every pipeline holds the lock from its first guard to the end of its terminal, so
/// requests against the same store are applied one at a time.
pub struct Store<R: Record> {
    records: Mutex<Vec<R>>,
}

impl<R: Record> Store<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, Vec<R>> {
        self.records.lock().await
    }
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

pub fn position_by_id<R: Record>(records: &[R], id: &str) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}
