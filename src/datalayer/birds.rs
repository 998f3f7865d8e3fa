use crate::errors::errors::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;

/// A persisted bird row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bird {
    pub id: i64,
    pub name: String,
}

/// Bird database operations
///
/// Every single-row lookup in this store returns a checked
/// `ServiceError::BirdNotFound` when no row matches; `sqlx::Error::RowNotFound`
/// never leaks out of this module.
pub struct BirdStore;

impl BirdStore {
    /// Create the birds table if it does not exist
    ///
    /// This is idempotent - can be called multiple times safely.
    /// AUTOINCREMENT keeps deleted ids from being reused.
    pub async fn init_schema(pool: &SqlitePool) -> ServiceResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS birds (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        info!("Birds table ready");
        Ok(())
    }

    /// Insert a new bird and return the persisted row
    ///
    /// The row is re-read after the insert so the response reflects the
    /// server-assigned id.
    pub async fn create(pool: &SqlitePool, name: &str) -> ServiceResult<Bird> {
        let result = sqlx::query(r#"INSERT INTO birds (name) VALUES (?1)"#)
            .bind(name)
            .execute(pool)
            .await?;

        let id = result.last_insert_rowid();
        Self::get_by_id(pool, id).await
    }

    /// Fetch all birds in storage order
    pub async fn list(pool: &SqlitePool) -> ServiceResult<Vec<Bird>> {
        let birds = sqlx::query_as::<_, Bird>(r#"SELECT id, name FROM birds"#)
            .fetch_all(pool)
            .await?;

        Ok(birds)
    }

    /// Get a bird by id
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> ServiceResult<Bird> {
        let bird = sqlx::query_as::<_, Bird>(r#"SELECT id, name FROM birds WHERE id = ?1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        bird.ok_or(ServiceError::BirdNotFound(id))
    }

    /// Rename a bird and return the updated row
    pub async fn update_name(pool: &SqlitePool, id: i64, name: &str) -> ServiceResult<Bird> {
        // Point lookup first so a missing id surfaces as not-found rather
        // than a silent zero-row update.
        Self::get_by_id(pool, id).await?;

        sqlx::query(r#"UPDATE birds SET name = ?1 WHERE id = ?2"#)
            .bind(name)
            .bind(id)
            .execute(pool)
            .await?;

        Self::get_by_id(pool, id).await
    }

    /// Delete a bird by id
    pub async fn delete(pool: &SqlitePool, id: i64) -> ServiceResult<()> {
        Self::get_by_id(pool, id).await?;

        sqlx::query(r#"DELETE FROM birds WHERE id = ?1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Exchange the names of two birds inside a single transaction
    ///
    /// Both rows are read before either is written; if either id is missing
    /// the transaction is dropped without committing and no row changes.
    /// There is no row versioning, so a concurrent writer between the reads
    /// and the commit loses its update (last commit wins).
    pub async fn swap_names(pool: &SqlitePool, first_id: i64, second_id: i64) -> ServiceResult<()> {
        let mut tx = pool.begin().await?;

        let first = sqlx::query_as::<_, Bird>(r#"SELECT id, name FROM birds WHERE id = ?1"#)
            .bind(first_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(ServiceError::BirdNotFound(first_id))?;

        let second = sqlx::query_as::<_, Bird>(r#"SELECT id, name FROM birds WHERE id = ?1"#)
            .bind(second_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(ServiceError::BirdNotFound(second_id))?;

        sqlx::query(r#"UPDATE birds SET name = ?1 WHERE id = ?2"#)
            .bind(&second.name)
            .bind(first.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(r#"UPDATE birds SET name = ?1 WHERE id = ?2"#)
            .bind(&first.name)
            .bind(second.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            first_id = %first_id,
            second_id = %second_id,
            "Bird names swapped"
        );

        Ok(())
    }
}
