use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::config::IsolationLevel;
use crate::error::LedgerResult;

/// One all-or-nothing store transaction.
///
/// Repository and engine calls borrow the connection through [`conn`].
/// Dropping a unit of work without [`commit`] rolls it back, so every early
/// return through `?` releases row locks and discards partial writes.
///
/// [`conn`]: UnitOfWork::conn
/// [`commit`]: UnitOfWork::commit
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    pub(crate) async fn begin(pool: &PgPool, isolation: IsolationLevel) -> LedgerResult<Self> {
        let mut tx = pool.begin().await?;
        // Must run before the first query of the transaction
        sqlx::query(isolation.as_sql()).execute(&mut *tx).await?;
        Ok(Self { tx })
    }

    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> LedgerResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> LedgerResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}
