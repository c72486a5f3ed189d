//! Repository layer for account rows
//!
//! Every function runs on the caller's transaction connection and does no
//! domain validation beyond what the row itself proves (existence, empty
//! balance on delete).

use sqlx::PgConnection;

use super::models::{Account, AccountId};
use crate::error::{LedgerError, LedgerResult};

pub struct AccountRepository;

impl AccountRepository {
    /// Insert a row with the given balance and return its generated id.
    /// The sign of `initial_balance` is not checked here.
    pub async fn create(conn: &mut PgConnection, initial_balance: i64) -> LedgerResult<AccountId> {
        let id: AccountId =
            sqlx::query_scalar(r#"INSERT INTO accounts_tb (balance) VALUES ($1) RETURNING id"#)
                .bind(initial_balance)
                .fetch_one(&mut *conn)
                .await?;

        tracing::debug!(account_id = id, balance = initial_balance, "Account row inserted");
        Ok(id)
    }

    /// Plain read of the balance. Exactly one row must match.
    pub async fn get_balance(conn: &mut PgConnection, id: AccountId) -> LedgerResult<i64> {
        let rows: Vec<i64> = sqlx::query_scalar(r#"SELECT balance FROM accounts_tb WHERE id = $1"#)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;

        match rows.as_slice() {
            [balance] => Ok(*balance),
            [] => Err(LedgerError::NotFound(id)),
            _ => {
                tracing::error!(account_id = id, rows = rows.len(), "Duplicate account rows");
                Err(LedgerError::NotFound(id))
            }
        }
    }

    /// Read the balance and hold an exclusive row lock until the enclosing
    /// transaction ends. Blocks while another transaction holds the lock.
    pub async fn lock_for_update(conn: &mut PgConnection, id: AccountId) -> LedgerResult<i64> {
        let balance: Option<i64> =
            sqlx::query_scalar(r#"SELECT balance FROM accounts_tb WHERE id = $1 FOR UPDATE"#)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        balance.ok_or(LedgerError::NotFound(id))
    }

    /// Unconditionally overwrite the balance
    pub async fn set_balance(
        conn: &mut PgConnection,
        id: AccountId,
        new_balance: i64,
    ) -> LedgerResult<()> {
        let result = sqlx::query(r#"UPDATE accounts_tb SET balance = $2 WHERE id = $1"#)
            .bind(id)
            .bind(new_balance)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(LedgerError::NotFound(id));
        }
        Ok(())
    }

    /// Remove an account whose balance is exactly zero.
    ///
    /// The row is locked first so a concurrent credit cannot land between the
    /// balance check and the delete.
    pub async fn delete(conn: &mut PgConnection, id: AccountId) -> LedgerResult<()> {
        let account = Account {
            id,
            balance: Self::lock_for_update(conn, id).await?,
        };

        if !account.is_empty() {
            return Err(LedgerError::InvalidState(format!(
                "account {} has non-zero balance {}",
                id, account.balance
            )));
        }

        sqlx::query(r#"DELETE FROM accounts_tb WHERE id = $1"#)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        tracing::debug!(account_id = id, "Account row deleted");
        Ok(())
    }
}
