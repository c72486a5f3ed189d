//! Account service: one unit of work per call
//!
//! Each method begins a transaction, runs repository or engine steps on it and
//! commits only when every step succeeded. Any `?` on the way out drops the
//! [`UnitOfWork`](crate::db::UnitOfWork), which rolls it back.

use crate::account::{AccountId, AccountRepository};
use crate::db::Database;
use crate::error::LedgerResult;
use crate::transfer::{TransferEngine, TransferReceipt, validate_request};

#[derive(Clone)]
pub struct AccountService {
    db: Database,
}

impl AccountService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Open an account with `balance` (0 when the caller has no preference)
    pub async fn create(&self, balance: i64) -> LedgerResult<AccountId> {
        let mut uow = self.db.begin().await?;
        let id = AccountRepository::create(uow.conn(), balance).await?;
        uow.commit().await?;

        tracing::info!(account_id = id, balance, "Account created");
        Ok(id)
    }

    pub async fn delete(&self, id: AccountId) -> LedgerResult<()> {
        let mut uow = self.db.begin().await?;
        AccountRepository::delete(uow.conn(), id).await?;
        uow.commit().await?;

        tracing::info!(account_id = id, "Account deleted");
        Ok(())
    }

    pub async fn get_balance(&self, id: AccountId) -> LedgerResult<i64> {
        let mut uow = self.db.begin().await?;
        let balance = AccountRepository::get_balance(uow.conn(), id).await?;
        uow.commit().await?;
        Ok(balance)
    }

    pub async fn transfer(
        &self,
        from_id: AccountId,
        to_id: AccountId,
        amount: i64,
    ) -> LedgerResult<TransferReceipt> {
        // Rejected inputs never acquire a connection
        validate_request(from_id, to_id, amount)?;

        let mut uow = self.db.begin().await?;
        let receipt = TransferEngine::transfer(uow.conn(), from_id, to_id, amount).await?;
        uow.commit().await?;

        tracing::info!(from_id, to_id, amount, "Transfer committed");
        Ok(receipt)
    }
}
