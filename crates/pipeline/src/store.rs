//! Abstract persistence gateway for the pipeline.
//!
//! The pipeline and the sequence allocator only ever need "the latest
//! card", inserts, and a bulk clear, so they depend on this trait rather
//! than on sqlx directly. Production binds it to PostgreSQL via
//! [`PgCardStore`]; tests bind it to an in-memory map.

use async_trait::async_trait;
use cardsmith_db::models::card::{Card, CreateCard};
use cardsmith_db::repositories::CardRepo;
use cardsmith_db::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A uniqueness conflict detected by a non-database store.
    #[error("store conflict: {0}")]
    Conflict(String),
}

#[async_trait]
pub trait CardStore: Send + Sync {
    /// The most recently created card, by insertion order.
    async fn find_latest(&self) -> Result<Option<Card>, StoreError>;

    /// Insert one card, returning the stored row.
    async fn insert(&self, card: &CreateCard) -> Result<Card, StoreError>;

    /// Insert a batch atomically: either every card is stored or none is.
    async fn insert_all(&self, cards: &[CreateCard]) -> Result<Vec<Card>, StoreError>;

    /// Delete every card, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, StoreError>;
}

/// PostgreSQL-backed [`CardStore`].
#[derive(Clone)]
pub struct PgCardStore {
    pool: DbPool,
}

impl PgCardStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardStore for PgCardStore {
    async fn find_latest(&self) -> Result<Option<Card>, StoreError> {
        Ok(CardRepo::find_latest(&self.pool).await?)
    }

    async fn insert(&self, card: &CreateCard) -> Result<Card, StoreError> {
        Ok(CardRepo::create(&self.pool, card).await?)
    }

    async fn insert_all(&self, cards: &[CreateCard]) -> Result<Vec<Card>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut stored = Vec::with_capacity(cards.len());
        for card in cards {
            stored.push(CardRepo::create(&mut *tx, card).await?);
        }
        tx.commit().await?;
        Ok(stored)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        Ok(CardRepo::delete_all(&self.pool).await?)
    }
}
