//! Repository for the `cards` table.

use cardsmith_core::types::DbId;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::card::{Card, CreateCard};

/// Column list for cards queries.
const COLUMNS: &str = "id, name, mana_cost, card_type, color, abilities, \
    power_toughness, flavor_text, rarity, image_url, set_name, card_number, \
    image_request_id, image_status, created_at";

/// Provides CRUD operations for cards.
pub struct CardRepo;

impl CardRepo {
    /// Insert a new card, returning the created row.
    ///
    /// Takes any executor so pack inserts can run inside a transaction.
    pub async fn create<'e, E>(executor: E, input: &CreateCard) -> Result<Card, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO cards
                (name, mana_cost, card_type, color, abilities,
                 power_toughness, flavor_text, rarity, image_url,
                 set_name, card_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(&input.name)
            .bind(&input.mana_cost)
            .bind(&input.card_type)
            .bind(&input.color)
            .bind(&input.abilities)
            .bind(&input.power_toughness)
            .bind(&input.flavor_text)
            .bind(&input.rarity)
            .bind(&input.image_url)
            .bind(&input.set_name)
            .bind(input.card_number)
            .fetch_one(executor)
            .await
    }

    /// The most recently created card, by insertion order.
    pub async fn find_latest(pool: &PgPool) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, Card>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = $1");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up a card by the artwork request that was dispatched for it.
    pub async fn find_by_image_request(
        pool: &PgPool,
        request_id: Uuid,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE image_request_id = $1");
        sqlx::query_as::<_, Card>(&query)
            .bind(request_id)
            .fetch_optional(pool)
            .await
    }

    /// One page of cards, newest first, plus the total row count.
    pub async fn list_page(
        pool: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<Card>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cards
             ORDER BY id DESC
             LIMIT $1 OFFSET $2"
        );
        let cards = sqlx::query_as::<_, Card>(&query)
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cards")
            .fetch_one(pool)
            .await?;

        Ok((cards, total))
    }

    /// Mark a card's artwork as in progress under the given request id.
    /// Returns `true` if a row was updated.
    pub async fn mark_image_in_progress(
        pool: &PgPool,
        id: DbId,
        request_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cards SET image_request_id = $1, image_status = $2 WHERE id = $3",
        )
        .bind(request_id)
        .bind(crate::models::card::image_status::IN_PROGRESS)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record the terminal artwork state for a card.
    /// Returns `true` if a row was updated.
    pub async fn update_artwork(
        pool: &PgPool,
        id: DbId,
        image_url: Option<&str>,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cards SET image_url = COALESCE($1, image_url), image_status = $2
             WHERE id = $3",
        )
        .bind(image_url)
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every card. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cards").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
