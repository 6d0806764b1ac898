use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaymentResourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TransactionType {
    SinglePayment,
    ForeignPayment,
    FutureSinglePayment,
    FutureSinglePaymentDelete,
    BulkPayment,
    FutureBulkPayment,
    FutureBulkPaymentDelete,
    StandingOrder,
    StandingOrderDelete,
    RawSepa,
    TanRequest,
    LoadBankAccounts,
    LoadBalances,
    LoadTransactions,
}

impl TransactionType {
    pub const ALL: [TransactionType; 14] = [
        TransactionType::SinglePayment,
        TransactionType::ForeignPayment,
        TransactionType::FutureSinglePayment,
        TransactionType::FutureSinglePaymentDelete,
        TransactionType::BulkPayment,
        TransactionType::FutureBulkPayment,
        TransactionType::FutureBulkPaymentDelete,
        TransactionType::StandingOrder,
        TransactionType::StandingOrderDelete,
        TransactionType::RawSepa,
        TransactionType::TanRequest,
        TransactionType::LoadBankAccounts,
        TransactionType::LoadBalances,
        TransactionType::LoadTransactions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::SinglePayment => "SINGLE_PAYMENT",
            TransactionType::ForeignPayment => "FOREIGN_PAYMENT",
            TransactionType::FutureSinglePayment => "FUTURE_SINGLE_PAYMENT",
            TransactionType::FutureSinglePaymentDelete => "FUTURE_SINGLE_PAYMENT_DELETE",
            TransactionType::BulkPayment => "BULK_PAYMENT",
            TransactionType::FutureBulkPayment => "FUTURE_BULK_PAYMENT",
            TransactionType::FutureBulkPaymentDelete => "FUTURE_BULK_PAYMENT_DELETE",
            TransactionType::StandingOrder => "STANDING_ORDER",
            TransactionType::StandingOrderDelete => "STANDING_ORDER_DELETE",
            TransactionType::RawSepa => "RAW_SEPA",
            TransactionType::TanRequest => "TAN_REQUEST",
            TransactionType::LoadBankAccounts => "LOAD_BANKACCOUNTS",
            TransactionType::LoadBalances => "LOAD_BALANCES",
            TransactionType::LoadTransactions => "LOAD_TRANSACTIONS",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = PaymentResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|tx_type| tx_type.as_str() == s)
            .ok_or_else(|| PaymentResourceError::InvalidEnumValue("transactionType", s.to_string()))
    }
}

impl TryFrom<&str> for TransactionType {
    type Error = PaymentResourceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for TransactionType {
    type Error = PaymentResourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransactionType> for &'static str {
    fn from(tx_type: TransactionType) -> Self {
        tx_type.as_str()
    }
}
