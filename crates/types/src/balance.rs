//! The account balance: available, pending and connect-reserved funds per currency.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::ExpandParams;

lit_str!(BalanceObject, "balance");

/// Funds held for the account, broken down by availability.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub object: BalanceObject,
    /// Funds available to be transferred or paid out.
    #[serde(default)]
    pub available: Option<Vec<BalanceAmount>>,
    /// Funds held due to negative balances on connected accounts.
    #[serde(default)]
    pub connect_reserved: Option<Vec<BalanceAmount>>,
    #[serde(default)]
    pub livemode: Option<bool>,
    /// Funds not yet available in the balance, due to the 7-day rolling pay cycle.
    #[serde(default)]
    pub pending: Option<Vec<BalanceAmount>>,
}

impl Balance {
    /// Available amount in `currency`, if the balance holds any.
    pub fn available_in(&self, currency: &str) -> Option<i64> {
        self.available
            .as_deref()?
            .iter()
            .find(|entry| entry.currency.eq_ignore_ascii_case(currency))
            .map(|entry| entry.amount)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceAmount {
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub source_types: Option<BalanceSourceTypes>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSourceTypes {
    #[serde(default)]
    pub bank_account: Option<i64>,
    #[serde(default)]
    pub card: Option<i64>,
}

pub type BalanceRetrieveParams = ExpandParams;
