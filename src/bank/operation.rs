//! Operation records driving the branch: one CSV row per account action.
use serde::{Deserialize, de};

use crate::bank::{DECIMAL_PRECISION, types::Money};

/// Enum representing the kind of operation requested on an account.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    OpenChecking,
    OpenSavings,
    Deposit,
    Withdraw,
    ApplyInterest,
    SetOverdraftLimit,
    DisplayInfo,
}

/// Custom deserializer for monetary values to handle fixed-point representation.
fn deserialize_money<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: de::Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| (v * DECIMAL_PRECISION).round() as Money))
}

/// A single requested account operation.
///
/// Which optional fields are required depends on the kind: opening an
/// account takes `name` and `amount` (the initial balance) plus `limit`
/// (checking) or `rate` (savings); deposits and withdrawals take `amount`;
/// `set_overdraft_limit` takes `limit`.
#[derive(Deserialize, Debug, Clone)]
pub struct Operation {
    /// What to do.
    #[serde(rename = "op")]
    kind: OperationKind,

    /// The account number the operation targets.
    #[serde(rename = "account")]
    account_number: String,

    /// The account holder's name, for open operations.
    #[serde(rename = "name", default)]
    customer_name: Option<String>,

    /// The monetary amount involved, if applicable.
    #[serde(rename = "amount", deserialize_with = "deserialize_money", default)]
    amount: Option<Money>,

    /// An overdraft limit, for checking accounts.
    #[serde(rename = "limit", deserialize_with = "deserialize_money", default)]
    limit: Option<Money>,

    /// An interest rate in percent, for savings accounts.
    #[serde(rename = "rate", default)]
    rate: Option<f64>,
}

impl Operation {
    /// Gets the kind of the operation.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Gets the account number the operation targets.
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Gets the account holder's name, if provided.
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    /// Gets the amount, if provided.
    pub fn amount(&self) -> Option<Money> {
        self.amount
    }

    /// Gets the overdraft limit, if provided.
    pub fn limit(&self) -> Option<Money> {
        self.limit
    }

    /// Gets the interest rate, if provided.
    pub fn rate(&self) -> Option<f64> {
        self.rate
    }

    #[cfg(test)]
    pub fn new(
        kind: OperationKind,
        account_number: &str,
        customer_name: Option<&str>,
        amount: Option<Money>,
        limit: Option<Money>,
        rate: Option<f64>,
    ) -> Self {
        Operation {
            kind,
            account_number: account_number.to_string(),
            customer_name: customer_name.map(str::to_string),
            amount,
            limit,
            rate,
        }
    }
}
