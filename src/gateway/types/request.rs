//! Request bodies accepted by the account endpoints

use serde::Deserialize;
use utoipa::ToSchema;

use crate::account::AccountId;

/// POST /account/ body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Initial balance in minor units, 0 when omitted
    #[serde(default)]
    #[schema(example = 30)]
    pub balance: i64,
}

/// POST /account/transfer body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    #[schema(example = 1)]
    pub from_id: AccountId,
    #[schema(example = 2)]
    pub to_id: AccountId,
    #[schema(example = 30)]
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_balance_defaults_to_zero() {
        let req: CreateAccountRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.balance, 0);

        let req: CreateAccountRequest = serde_json::from_str(r#"{"balance": 30}"#).unwrap();
        assert_eq!(req.balance, 30);
    }

    #[test]
    fn test_transfer_uses_camel_case() {
        let req: TransferRequest =
            serde_json::from_str(r#"{"fromId": 1, "toId": 2, "amount": 30}"#).unwrap();
        assert_eq!((req.from_id, req.to_id, req.amount), (1, 2, 30));

        assert!(serde_json::from_str::<TransferRequest>(r#"{"from_id": 1, "to_id": 2, "amount": 30}"#).is_err());
    }

    #[test]
    fn test_transfer_rejects_fractional_amount() {
        assert!(serde_json::from_str::<TransferRequest>(r#"{"fromId": 1, "toId": 2, "amount": 1.5}"#).is_err());
        assert!(serde_json::from_str::<TransferRequest>(r#"{"fromId": 1, "toId": 2}"#).is_err());
    }
}
