use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::account::BankAccount;
use crate::error::PaymentResourceError;
use crate::link::Link;
use crate::transaction::TransactionType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub amount: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu_account: Option<BankAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purposecode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_account_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tan_submit_external: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl PaymentResource {
    pub fn from_json(input: &str) -> Result<Self, PaymentResourceError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    // Checked up front so an unknown tag surfaces as InvalidEnumValue.
    pub fn from_value(value: Value) -> Result<Self, PaymentResourceError> {
        if let Some(tag) = value.get("transactionType").and_then(Value::as_str) {
            tag.parse::<TransactionType>()?;
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String, PaymentResourceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_value(&self) -> Result<Value, PaymentResourceError> {
        Ok(serde_json::to_value(self)?)
    }
}
