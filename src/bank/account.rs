//! Shared account base: identity, balance, and the append-only transaction log.
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::bank::{
    DECIMAL_PRECISION,
    types::{Money, money_to_f64},
};

fn serialize_money<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    (*money as f64 / DECIMAL_PRECISION).serialize(serializer)
}

/// Kind of entry recorded in an account's transaction log.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Fee,
    Interest,
    OverdraftLimitChange,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
            TransactionKind::Fee => "FEE",
            TransactionKind::Interest => "INTEREST",
            TransactionKind::OverdraftLimitChange => "OVERDRAFT_LIMIT_CHANGE",
        };
        write!(f, "{label}")
    }
}

/// A single entry in an account's transaction log.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    /// What happened.
    pub kind: TransactionKind,

    /// The amount involved.
    #[serde(serialize_with = "serialize_money")]
    pub amount: Money,
}

/// The state every account variant shares: identity, balance, and log.
/// Variants mutate the balance only through [`AccountBase::set_balance`];
/// all validation is the variant's responsibility.
#[derive(Serialize, Debug, Clone)]
pub struct AccountBase {
    /// The unique account number.
    #[serde(rename = "account")]
    account_number: String,

    /// The name of the account holder.
    #[serde(rename = "customer")]
    customer_name: String,

    /// The current balance. May be negative for overdraft-capable variants.
    #[serde(serialize_with = "serialize_money")]
    balance: Money,

    /// Append-only log of everything that touched the balance.
    #[serde(skip)]
    log: Vec<LogEntry>,
}

impl AccountBase {
    /// Creates the shared base for a new account.
    pub fn new(account_number: impl Into<String>, customer_name: impl Into<String>, initial_balance: Money) -> Self {
        AccountBase {
            account_number: account_number.into(),
            customer_name: customer_name.into(),
            balance: initial_balance,
            log: Vec::new(),
        }
    }

    /// Gets the account number.
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Gets the account holder's name.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Gets the current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Unconditionally replaces the balance. Callers check their own limits first.
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    /// Appends an entry to the transaction log.
    pub fn log_transaction(&mut self, kind: TransactionKind, amount: Money) {
        self.log.push(LogEntry { kind, amount });
    }

    /// Gets the transaction log, oldest entry first.
    pub fn transactions(&self) -> &[LogEntry] {
        &self.log
    }

    /// Deposits the specified amount. Rejects non-positive amounts, otherwise
    /// credits the balance and logs a `DEPOSIT` entry.
    pub fn deposit(&mut self, amount: Money) -> Result<(), DepositError> {
        if amount <= 0 {
            return Err(DepositError::NonPositiveAmount);
        }
        self.balance += amount;
        self.log_transaction(TransactionKind::Deposit, amount);
        Ok(())
    }

    /// Renders the identity and balance lines shared by every account variant.
    /// Variant `display_info` implementations append their own lines to this.
    pub fn display_info(&self) -> String {
        format!(
            "Account Number: {}\nAccount Holder: {}\nBalance: ${:.2}",
            self.account_number,
            self.customer_name,
            money_to_f64(self.balance),
        )
    }
}

/// Behavior every account variant specializes.
pub trait Account {
    /// Gets the shared base state.
    fn base(&self) -> &AccountBase;

    /// Gets the shared base state mutably.
    fn base_mut(&mut self) -> &mut AccountBase;

    /// Withdraws the specified amount under the variant's own rules.
    /// On success the returned notice, if any, is advisory only.
    fn withdraw(&mut self, amount: Money) -> Result<Option<Notice>, WithdrawError>;

    /// Renders the base info followed by variant-specific lines.
    fn display_info(&self) -> String;

    /// Gets the current balance.
    fn balance(&self) -> Money {
        self.base().balance()
    }
}

/// Why a withdrawal was rejected. Rejections leave the balance and the
/// transaction log untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WithdrawError {
    #[error("Withdrawal amount must be positive")]
    NonPositiveAmount,
    #[error("Cannot withdraw: Would exceed overdraft limit of ${0:.2}")]
    OverdraftLimitExceeded(f64),
    #[error("Cannot withdraw: Would violate minimum balance requirement of ${0:.2}")]
    BelowMinimumBalance(f64),
}

/// Why a deposit was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepositError {
    #[error("Deposit amount must be positive")]
    NonPositiveAmount,
}

/// Advisory message produced by a successful operation. Never indicates
/// failure; callers choose whether to surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The balance went negative after a successful checking withdrawal.
    Overdrawn { balance: Money },
    /// Interest was credited to a savings account.
    InterestApplied { amount: Money },
    /// An overdraft limit change was requested and recorded in the log.
    /// The stored limit itself never changes.
    OverdraftLimitChangeRequested { limit: Money },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Overdrawn { balance } => write!(
                f,
                "Account is in overdraft. Current balance: ${:.2}",
                money_to_f64(*balance)
            ),
            Notice::InterestApplied { amount } => {
                write!(f, "Applied interest: ${:.2}", money_to_f64(*amount))
            }
            Notice::OverdraftLimitChangeRequested { limit } => {
                write!(f, "Setting overdraft limit to ${:.2}", money_to_f64(*limit))
            }
        }
    }
}

/// Closed set of account variants, for heterogeneous storage.
#[derive(Debug, Clone)]
pub enum AnyAccount {
    Checking(crate::bank::CheckingAccount),
    Savings(crate::bank::SavingsAccount),
}

impl Account for AnyAccount {
    fn base(&self) -> &AccountBase {
        match self {
            AnyAccount::Checking(account) => account.base(),
            AnyAccount::Savings(account) => account.base(),
        }
    }

    fn base_mut(&mut self) -> &mut AccountBase {
        match self {
            AnyAccount::Checking(account) => account.base_mut(),
            AnyAccount::Savings(account) => account.base_mut(),
        }
    }

    fn withdraw(&mut self, amount: Money) -> Result<Option<Notice>, WithdrawError> {
        match self {
            AnyAccount::Checking(account) => account.withdraw(amount),
            AnyAccount::Savings(account) => account.withdraw(amount),
        }
    }

    fn display_info(&self) -> String {
        match self {
            AnyAccount::Checking(account) => account.display_info(),
            AnyAccount::Savings(account) => account.display_info(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AccountBase {
        AccountBase::new("ACC-001", "Jane Doe", 1_000_000)
    }

    #[test]
    fn test_deposit() {
        let mut account = base();
        assert!(account.deposit(250_000).is_ok());
        assert_eq!(account.balance(), 1_250_000);
        assert_eq!(
            account.transactions(),
            &[LogEntry {
                kind: TransactionKind::Deposit,
                amount: 250_000
            }]
        );
    }

    #[test]
    fn test_deposit_non_positive() {
        let mut account = base();
        assert!(matches!(
            account.deposit(0),
            Err(DepositError::NonPositiveAmount)
        ));
        assert!(matches!(
            account.deposit(-100),
            Err(DepositError::NonPositiveAmount)
        ));
        assert_eq!(account.balance(), 1_000_000);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_base_display() {
        let account = base();
        assert_eq!(account.account_number(), "ACC-001");
        assert_eq!(account.customer_name(), "Jane Doe");
        assert_eq!(
            account.display_info(),
            "Account Number: ACC-001\nAccount Holder: Jane Doe\nBalance: $100.00"
        );
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(
            Notice::Overdrawn { balance: -415_000 }.to_string(),
            "Account is in overdraft. Current balance: $-41.50"
        );
        assert_eq!(
            Notice::InterestApplied { amount: 100_000 }.to_string(),
            "Applied interest: $10.00"
        );
        assert_eq!(
            Notice::OverdraftLimitChangeRequested { limit: 750_000 }.to_string(),
            "Setting overdraft limit to $75.00"
        );
    }

    #[test]
    fn test_withdraw_error_messages() {
        assert_eq!(
            WithdrawError::NonPositiveAmount.to_string(),
            "Withdrawal amount must be positive"
        );
        assert_eq!(
            WithdrawError::OverdraftLimitExceeded(50.0).to_string(),
            "Cannot withdraw: Would exceed overdraft limit of $50.00"
        );
        assert_eq!(
            WithdrawError::BelowMinimumBalance(100.0).to_string(),
            "Cannot withdraw: Would violate minimum balance requirement of $100.00"
        );
    }
}
