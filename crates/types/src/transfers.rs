//! Transfers to connected accounts and the reversals issued against them.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    accounts::Account,
    common::{
        BalanceTransaction, Charge, ExpandParams, Expandable, List, ListParams, Metadata, Object,
        RangeQuery, Timestamp,
    },
};

lit_str!(TransferObject, "transfer");
lit_str!(TransferReversalObject, "transfer_reversal");

/// Which balance a transfer is funded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferSourceType {
    BankAccount,
    Card,
}

/// Funds moved from the platform balance to a connected account.
///
/// Every field besides the identifier and discriminator may be left out of
/// the payload, so they are all optional here.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    pub object: TransferObject,
    /// Amount in the smallest currency unit.
    #[serde(default)]
    pub amount: Option<i64>,
    /// Amount reversed, can be less than the amount attribute on the transfer if a partial reversal was issued.
    #[serde(default)]
    pub amount_reversed: Option<i64>,
    #[serde(default)]
    pub balance_transaction: Option<Expandable<BalanceTransaction>>,
    #[serde(default)]
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// ID of the account the transfer was sent to.
    #[serde(default)]
    pub destination: Option<Expandable<Account>>,
    /// The payment created on the destination account.
    #[serde(default)]
    pub destination_payment: Option<Expandable<Charge>>,
    #[serde(default)]
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub reversals: Option<List<TransferReversal>>,
    /// Whether the transfer has been fully reversed.
    #[serde(default)]
    pub reversed: Option<bool>,
    #[serde(default)]
    pub source_transaction: Option<Expandable<Charge>>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub transfer_group: Option<String>,
}

impl Object for Transfer {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        TransferObject::VALUE
    }
}

/// A full or partial reversal of a transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReversal {
    pub id: String,
    pub object: TransferReversalObject,
    pub amount: i64,
    #[serde(default)]
    pub balance_transaction: Option<Expandable<BalanceTransaction>>,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default)]
    pub destination_payment_refund: Option<Expandable<crate::common::ApiObject>>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub source_refund: Option<Expandable<crate::common::ApiObject>>,
    /// The transfer that was reversed.
    pub transfer: Expandable<Transfer>,
}

impl Object for TransferReversal {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        TransferReversalObject::VALUE
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferCreateParams {
    pub amount: Option<i64>,
    /// 3-letter ISO code for currency.
    pub currency: String,
    pub description: Option<String>,
    /// The ID of a connected account.
    pub destination: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub metadata: Option<Metadata>,
    /// A charge on the platform whose funds back this transfer.
    pub source_transaction: Option<String>,
    pub source_type: Option<TransferSourceType>,
    pub transfer_group: Option<String>,
}

impl TransferCreateParams {
    pub fn new(currency: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            amount: None,
            currency: currency.into(),
            description: None,
            destination: destination.into(),
            expand: Vec::new(),
            metadata: None,
            source_transaction: None,
            source_type: None,
            transfer_group: None,
        }
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferListParams {
    pub created: Option<RangeQuery>,
    /// Only return transfers for the destination specified by this account ID.
    pub destination: Option<String>,
    #[serde(flatten)]
    pub page: ListParams,
    pub transfer_group: Option<String>,
}

pub type TransferRetrieveParams = ExpandParams;

/// Only the description and metadata of a transfer can change.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransferUpdateParams {
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub metadata: Option<Metadata>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferCreateReversalParams {
    /// Defaults to the entire transfer amount.
    pub amount: Option<i64>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub metadata: Option<Metadata>,
    /// Whether the application fee should be refunded when reversing this transfer.
    pub refund_application_fee: Option<bool>,
}

pub type TransferListReversalsParams = ListParams;
pub type TransferRetrieveReversalParams = ExpandParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferUpdateReversalParams {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub metadata: Option<Metadata>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_requires_currency_and_destination() {
        let missing_destination = json!({ "amount": 1000, "currency": "usd" });
        assert!(serde_json::from_value::<TransferCreateParams>(missing_destination).is_err());

        let missing_currency = json!({ "amount": 1000, "destination": "acct_1" });
        assert!(serde_json::from_value::<TransferCreateParams>(missing_currency).is_err());
    }

    #[test]
    fn test_update_does_not_accept_destination() {
        let value = json!({ "description": "moved", "destination": "acct_2" });
        assert!(serde_json::from_value::<TransferUpdateParams>(value).is_err());
    }

    #[test]
    fn test_source_type_is_closed() {
        let value = json!({ "currency": "usd", "destination": "acct_1", "source_type": "fpx" });
        assert!(serde_json::from_value::<TransferCreateParams>(value).is_err());
    }

    #[test]
    fn test_created_transfer_echoes_create_fields() {
        let params = TransferCreateParams::new("usd", "acct_1").with_amount(1000);
        let sent = serde_json::to_value(&params).unwrap();
        assert_eq!(
            sent,
            json!({ "amount": 1000, "currency": "usd", "destination": "acct_1" })
        );

        let transfer: Transfer = serde_json::from_value(json!({
            "id": "tr_1",
            "object": "transfer",
            "amount": 1000,
            "amount_reversed": 0,
            "currency": "usd",
            "destination": "acct_1",
            "destination_payment": "py_1",
            "reversals": {
                "object": "list",
                "data": [],
                "has_more": false,
                "url": "/v1/transfers/tr_1/reversals"
            },
            "reversed": false,
            "source_type": "card"
        }))
        .unwrap();

        assert_eq!(transfer.amount, params.amount);
        assert_eq!(transfer.currency.as_deref(), Some(params.currency.as_str()));
        assert_eq!(
            transfer.destination.as_ref().map(|d| d.id()),
            Some(params.destination.as_str())
        );
        assert!(transfer.reversals.unwrap().is_empty());
    }

    #[test]
    fn test_sparse_transfer_deserializes() {
        let transfer: Transfer =
            serde_json::from_value(json!({ "id": "tr_1", "object": "transfer" })).unwrap();
        assert_eq!(transfer.amount, None);
        assert_eq!(
            serde_json::to_value(&transfer).unwrap(),
            json!({ "id": "tr_1", "object": "transfer" })
        );
    }

    #[test]
    fn test_reversal_points_back_to_transfer() {
        let reversal: TransferReversal = serde_json::from_value(json!({
            "id": "trr_1",
            "object": "transfer_reversal",
            "amount": 400,
            "balance_transaction": null,
            "created": 1573000000,
            "currency": "usd",
            "metadata": {},
            "transfer": "tr_1"
        }))
        .unwrap();
        assert_eq!(reversal.transfer.id(), "tr_1");
        assert_eq!(reversal.object(), "transfer_reversal");
    }
}
