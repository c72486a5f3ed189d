use sqlx::PgPool;

pub const ACCOUNTS_TABLE: &str = "accounts_tb";

/// Advisory lock key serializing DDL between processes sharing one database
const SCHEMA_LOCK_KEY: i64 = 0x4c45_4447_4552;

const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts_tb (
    id      BIGSERIAL PRIMARY KEY,
    balance BIGINT NOT NULL DEFAULT 0
)
"#;

const DROP_ACCOUNTS_TABLE: &str = "DROP TABLE IF EXISTS accounts_tb";

async fn run_ddl(pool: &PgPool, statement: &str) -> Result<(), sqlx::Error> {
    // Concurrent CREATE TABLE IF NOT EXISTS can still collide in pg_type
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::query(statement).execute(&mut *tx).await?;
    tx.commit().await
}

/// Create the account table if it does not exist yet
pub async fn create_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    run_ddl(pool, CREATE_ACCOUNTS_TABLE).await?;
    tracing::info!(table = ACCOUNTS_TABLE, "Ledger schema ready");
    Ok(())
}

/// Drop the account table and every balance in it
pub async fn drop_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    run_ddl(pool, DROP_ACCOUNTS_TABLE).await?;
    tracing::info!(table = ACCOUNTS_TABLE, "Ledger schema dropped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_config;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
    use std::str::FromStr;

    /// Private namespace so the drop cannot race tests sharing `public.accounts_tb`
    const TEST_NAMESPACE: &str = "ledger_schema_lifecycle";

    async fn isolated_pool() -> PgPool {
        let url = test_config().url;
        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("Failed to connect");
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", TEST_NAMESPACE))
            .execute(&admin)
            .await
            .expect("Failed to create namespace");
        admin.close().await;

        let options = PgConnectOptions::from_str(&url)
            .expect("Invalid database url")
            .options([("search_path", TEST_NAMESPACE)]);
        PgPoolOptions::new()
            .max_connections(2)
            .connect_with(options)
            .await
            .expect("Failed to connect")
    }

    async fn table_exists(pool: &PgPool) -> bool {
        let regclass: Option<String> = sqlx::query_scalar("SELECT to_regclass('accounts_tb')::text")
            .fetch_one(pool)
            .await
            .expect("Failed to query catalog");
        regclass.is_some()
    }

    #[tokio::test]
    #[ignore] // Requires PostgreSQL running
    async fn test_drop_then_recreate_schema() {
        let pool = isolated_pool().await;

        create_schema(&pool).await.unwrap();
        assert!(table_exists(&pool).await);

        drop_schema(&pool).await.unwrap();
        assert!(!table_exists(&pool).await, "Table should be gone after drop");

        // Dropping twice is harmless
        drop_schema(&pool).await.unwrap();

        create_schema(&pool).await.unwrap();
        assert!(table_exists(&pool).await);
        let balance: i64 =
            sqlx::query_scalar("INSERT INTO accounts_tb DEFAULT VALUES RETURNING balance")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(balance, 0);

        sqlx::query(&format!("DROP SCHEMA {} CASCADE", TEST_NAMESPACE))
            .execute(&pool)
            .await
            .unwrap();
    }
}
