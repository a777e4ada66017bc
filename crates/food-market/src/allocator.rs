//! # Sequence Allocator
//!
//! Hands out integer identifiers from the counter rows. Every value returned for a key
//! is strictly greater than every value returned before it for that key, and no two
//! callers ever receive the same value. Values are not gap-free: a caller that
//! allocates and then fails to store its document leaves a hole.
//!
//! ```rust,ignore
//! let allocator = SequenceAllocator::new(sequence_client, &MarketConfig::default());
//! let order_id = OrderId(allocator.next_for(EntityKind::Order).await?);
//! ```

use crate::clients::SequenceClient;
use crate::config::MarketConfig;
use crate::error::MarketError;
use crate::model::{EntityKind, SequenceKey};
use crate::sequence_actor::SequenceError;
use crate::store::SequenceStore;
use tracing::{debug, instrument, warn};

/// Allocates identifiers through a [`SequenceStore`].
#[derive(Clone)]
pub struct SequenceAllocator<S = SequenceClient> {
    store: S,
    collection: String,
    max_attempts: u32,
}

impl<S: SequenceStore> SequenceAllocator<S> {
    pub fn new(store: S, config: &MarketConfig) -> Self {
        Self {
            store,
            collection: config.sequence_collection.clone(),
            max_attempts: config.sequence_max_attempts.max(1),
        }
    }

    /// The counter row used for `kind` in the configured collection.
    pub fn key_for(&self, kind: EntityKind) -> SequenceKey {
        kind.sequence_key(&self.collection)
    }

    /// Returns the next value for `key`.
    ///
    /// Write conflicts are retried up to the configured attempt count. Any other
    /// failure, or running out of attempts, is a [`MarketError::SequencePersistence`].
    #[instrument(skip(self, key), fields(key = %key))]
    pub async fn next(&self, key: &SequenceKey) -> Result<u32, MarketError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.store.increment_sequence(key).await {
                Ok(value) => {
                    debug!(value, attempt, "Allocated");
                    return Ok(value);
                }
                Err(SequenceError::Conflict(reason)) if attempt < self.max_attempts => {
                    warn!(attempt, %reason, "Sequence conflict, retrying");
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Allocation failed");
                    return Err(MarketError::SequencePersistence {
                        key: key.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    /// Returns the next identifier for documents of `kind`.
    pub async fn next_for(&self, kind: EntityKind) -> Result<u32, MarketError> {
        self.next(&self.key_for(kind)).await
    }

    /// The last value issued for `key` without allocating; `None` before the first
    /// allocation.
    pub async fn current(&self, key: &SequenceKey) -> Result<Option<u32>, MarketError> {
        self.store
            .find_sequence(key)
            .await
            .map_err(|e| MarketError::SequencePersistence {
                key: key.clone(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Reports `conflicts` write conflicts before it starts counting.
    struct FlakyStore {
        conflicts: AtomicU32,
        calls: AtomicU32,
        value: AtomicU32,
    }

    impl FlakyStore {
        fn new(conflicts: u32) -> Self {
            Self {
                conflicts: AtomicU32::new(conflicts),
                calls: AtomicU32::new(0),
                value: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl SequenceStore for FlakyStore {
        async fn find_sequence(&self, _key: &SequenceKey) -> Result<Option<u32>, SequenceError> {
            Ok(Some(self.value.load(Ordering::SeqCst)))
        }

        async fn increment_sequence(&self, key: &SequenceKey) -> Result<u32, SequenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.conflicts.load(Ordering::SeqCst) > 0 {
                self.conflicts.fetch_sub(1, Ordering::SeqCst);
                return Err(SequenceError::Conflict(key.to_string()));
            }
            Ok(self.value.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    struct DownStore;

    #[async_trait]
    impl SequenceStore for DownStore {
        async fn find_sequence(&self, _key: &SequenceKey) -> Result<Option<u32>, SequenceError> {
            Err(SequenceError::ActorCommunicationError("Actor closed".to_string()))
        }

        async fn increment_sequence(&self, _key: &SequenceKey) -> Result<u32, SequenceError> {
            Err(SequenceError::ActorCommunicationError("Actor closed".to_string()))
        }
    }

    #[tokio::test]
    async fn test_conflicts_within_budget_are_absorbed() {
        let allocator = SequenceAllocator::new(FlakyStore::new(4), &MarketConfig::default());
        let key = allocator.key_for(EntityKind::Order);

        assert_eq!(allocator.next(&key).await, Ok(1));
        assert_eq!(allocator.store.calls.load(Ordering::SeqCst), 5);
        assert_eq!(allocator.next(&key).await, Ok(2));
    }

    #[tokio::test]
    async fn test_conflicts_exhaust_the_budget() {
        let allocator =
            SequenceAllocator::new(FlakyStore::new(u32::MAX), &MarketConfig::default());
        let key = allocator.key_for(EntityKind::Menu);

        let err = allocator.next(&key).await.unwrap_err();
        assert!(matches!(err, MarketError::SequencePersistence { .. }));
        assert_eq!(allocator.store.calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_unreachable_store_fails_without_retry() {
        let allocator = SequenceAllocator::new(DownStore, &MarketConfig::default());
        let key = allocator.key_for(EntityKind::Seller);

        assert_eq!(
            allocator.next(&key).await,
            Err(MarketError::SequencePersistence {
                key: SequenceKey::new("counters", "seller_id"),
                reason: "Actor communication error: Actor closed".to_string(),
            })
        );
        assert!(allocator.current(&key).await.is_err());
    }

    #[test]
    fn test_keys_use_configured_collection() {
        let config = MarketConfig {
            sequence_collection: "ids".to_string(),
            ..MarketConfig::default()
        };
        let allocator = SequenceAllocator::new(DownStore, &config);
        assert_eq!(
            allocator.key_for(EntityKind::Customer),
            SequenceKey::new("ids", "customer_id")
        );
    }
}
