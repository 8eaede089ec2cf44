use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::stock::model::{StockLevel, StockRecord};
use business::domain::stock::repository::StockRepository;

use super::entity::StockLevelEntity;

pub struct StockRepositoryPostgres {
    pool: PgPool,
}

impl StockRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockRepository for StockRepositoryPostgres {
    async fn fetch_all(&self) -> Result<Vec<StockLevel>, RepositoryError> {
        let entities = sqlx::query_as::<_, StockLevelEntity>(
            "SELECT product_id, quantity, updated_at FROM stock_levels",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn upsert(&self, records: &[StockRecord]) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for record in records {
            sqlx::query(
                r#"INSERT INTO stock_levels (product_id, quantity, updated_at)
                VALUES ($1, $2, $3)
                ON CONFLICT (product_id) DO UPDATE SET
                    quantity = EXCLUDED.quantity,
                    updated_at = EXCLUDED.updated_at"#,
            )
            .bind(&record.level.product_id)
            .bind(record.level.quantity)
            .bind(record.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
