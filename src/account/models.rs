//! Data model for ledger accounts

/// Store-generated account identifier, immutable once assigned
pub type AccountId = i64;

/// A ledger account. Balance is in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub balance: i64,
}

impl Account {
    /// Only empty accounts may be deleted
    pub fn is_empty(&self) -> bool {
        self.balance == 0
    }
}
