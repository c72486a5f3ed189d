//! Transfer engine: ordered locking, validate, then debit/credit
//!
//! # Protocol
//!
//! ```text
//! validate(amount > 0, from != to)
//!   → lock(min_id) → lock(max_id)
//!   → check from_balance >= amount
//!   → set_balance(from, -amount) + set_balance(to, +amount)
//!   → commit (caller)
//! ```
//!
//! # Safety Invariants
//!
//! 1. **Lock by id, not by role**: both rows are locked lowest id first, so two
//!    transfers over the same pair in opposite directions request locks in the
//!    same global order and cannot wait on each other in a cycle.
//! 2. **Validate under lock**: the balance check reads the locked row, so no
//!    concurrent writer can change it before the debit is written.
//! 3. **No partial mutation**: every failure returns before or between writes of
//!    the same transaction; the caller drops the unit of work and both rows roll back.

use sqlx::PgConnection;

use crate::account::{AccountId, AccountRepository};
use crate::error::{LedgerError, LedgerResult};

/// Order in which the two rows of a transfer are locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOrder {
    pub first: AccountId,
    pub second: AccountId,
}

impl LockOrder {
    pub fn for_pair(from_id: AccountId, to_id: AccountId) -> Self {
        Self {
            first: from_id.min(to_id),
            second: from_id.max(to_id),
        }
    }
}

/// Balances of both accounts after a successful transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    pub from_id: AccountId,
    pub to_id: AccountId,
    pub amount: i64,
    pub from_balance: i64,
    pub to_balance: i64,
}

/// Reject inputs before any row is touched
pub fn validate_request(from_id: AccountId, to_id: AccountId, amount: i64) -> LedgerResult<()> {
    if amount <= 0 {
        return Err(LedgerError::invalid_argument(format!(
            "amount must be positive: {}",
            amount
        )));
    }
    // Same row twice would self-deadlock on the second lock
    if from_id == to_id {
        return Err(LedgerError::invalid_argument(format!(
            "illegal transfer: source and target are both account {}",
            from_id
        )));
    }
    Ok(())
}

/// New (from, to) balances, or the reason the transfer cannot happen
pub fn settle(from_balance: i64, to_balance: i64, amount: i64) -> LedgerResult<(i64, i64)> {
    if from_balance < amount {
        return Err(LedgerError::InsufficientFunds {
            balance: from_balance,
            amount,
        });
    }
    let credited = to_balance
        .checked_add(amount)
        .ok_or(LedgerError::Overflow {
            balance: to_balance,
            amount,
        })?;
    Ok((from_balance - amount, credited))
}

pub struct TransferEngine;

impl TransferEngine {
    /// Move `amount` from `from_id` to `to_id` inside the caller's transaction.
    ///
    /// Nothing is committed here. On `Err` the caller must drop or roll back
    /// the transaction.
    pub async fn transfer(
        conn: &mut PgConnection,
        from_id: AccountId,
        to_id: AccountId,
        amount: i64,
    ) -> LedgerResult<TransferReceipt> {
        validate_request(from_id, to_id, amount)?;

        let order = LockOrder::for_pair(from_id, to_id);
        let first_balance = AccountRepository::lock_for_update(conn, order.first).await?;
        let second_balance = AccountRepository::lock_for_update(conn, order.second).await?;

        let (from_balance, to_balance) = if from_id == order.first {
            (first_balance, second_balance)
        } else {
            (second_balance, first_balance)
        };

        let (new_from, new_to) = match settle(from_balance, to_balance, amount) {
            Ok(balances) => balances,
            Err(e) => {
                tracing::warn!(from_id, to_id, amount, from_balance, error = %e, "Transfer rejected");
                return Err(e);
            }
        };

        AccountRepository::set_balance(conn, from_id, new_from).await?;
        AccountRepository::set_balance(conn, to_id, new_to).await?;

        tracing::debug!(from_id, to_id, amount, new_from, new_to, "Transfer applied");
        Ok(TransferReceipt {
            from_id,
            to_id,
            amount,
            from_balance: new_from,
            to_balance: new_to,
        })
    }
}
