use crate::domain::health_store::entities::StoreChange;

/// Receives every committed store change, in increasing revision order.
///
/// Called after the write lock is released, so observers may read the store.
/// Mutating the store from `on_change` deadlocks.
#[cfg_attr(test, mockall::automock)]
pub trait StoreObserver: Send + Sync {
    fn on_change(&self, change: &StoreChange);
}
