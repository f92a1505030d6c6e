//! The `Branch` manages the accounts and processes the incoming operation stream.
use std::collections::BTreeMap;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::bank::{
    Account, AnyAccount, CheckingAccount, DepositError, Operation, OperationKind, SavingsAccount,
    WithdrawError,
};

/// Holds every account of the branch and applies operations one at a time.
/// Accounts carry no synchronization of their own; this single consumer is
/// what serializes access to them.
pub struct Branch {
    /// Accounts keyed by account number, ordered for stable summary output.
    accounts: BTreeMap<String, AnyAccount>,
    /// A channel receiver for the incoming operations.
    receiver: mpsc::Receiver<Operation>,
}

impl Branch {
    /// Creates a new branch with no accounts.
    pub fn new(receiver: mpsc::Receiver<Operation>) -> Self {
        Branch {
            accounts: BTreeMap::new(),
            receiver,
        }
    }

    /// Retrieves all accounts of the branch.
    pub fn get_all_accounts(&self) -> &BTreeMap<String, AnyAccount> {
        &self.accounts
    }

    fn account_mut(&mut self, number: &str) -> Result<&mut AnyAccount, OperationError> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| OperationError::AccountNotFound(number.to_string()))
    }

    fn open(&mut self, number: &str, account: AnyAccount) -> Result<Option<String>, OperationError> {
        if self.accounts.contains_key(number) {
            return Err(OperationError::AccountAlreadyExists(number.to_string()));
        }
        self.accounts.insert(number.to_string(), account);
        Ok(None)
    }

    /// Applies a single operation. Returns the advisory or informational
    /// message the operation produced, if any.
    pub fn apply(&mut self, operation: Operation) -> Result<Option<String>, OperationError> {
        let number = operation.account_number().to_string();
        match operation.kind() {
            OperationKind::OpenChecking => {
                let name = operation
                    .customer_name()
                    .ok_or(OperationError::MissingField("name"))?
                    .to_string();
                let balance = operation
                    .amount()
                    .ok_or(OperationError::MissingField("amount"))?;
                let limit = operation
                    .limit()
                    .ok_or(OperationError::MissingField("limit"))?;
                self.open(
                    &number,
                    AnyAccount::Checking(CheckingAccount::new(number.as_str(), name, balance, limit)),
                )
            }
            OperationKind::OpenSavings => {
                let name = operation
                    .customer_name()
                    .ok_or(OperationError::MissingField("name"))?
                    .to_string();
                let balance = operation
                    .amount()
                    .ok_or(OperationError::MissingField("amount"))?;
                let rate = operation
                    .rate()
                    .ok_or(OperationError::MissingField("rate"))?;
                self.open(
                    &number,
                    AnyAccount::Savings(SavingsAccount::new(number.as_str(), name, balance, rate)),
                )
            }
            OperationKind::Deposit => {
                let amount = operation
                    .amount()
                    .ok_or(OperationError::MissingField("amount"))?;
                self.account_mut(&number)?.base_mut().deposit(amount)?;
                Ok(None)
            }
            OperationKind::Withdraw => {
                let amount = operation
                    .amount()
                    .ok_or(OperationError::MissingField("amount"))?;
                let notice = self.account_mut(&number)?.withdraw(amount)?;
                Ok(notice.map(|notice| notice.to_string()))
            }
            OperationKind::ApplyInterest => match self.account_mut(&number)? {
                AnyAccount::Savings(account) => Ok(Some(account.apply_interest().to_string())),
                AnyAccount::Checking(_) => Err(OperationError::NotASavingsAccount(number)),
            },
            OperationKind::SetOverdraftLimit => {
                let limit = operation
                    .limit()
                    .ok_or(OperationError::MissingField("limit"))?;
                match self.account_mut(&number)? {
                    AnyAccount::Checking(account) => {
                        Ok(Some(account.set_overdraft_limit(limit).to_string()))
                    }
                    AnyAccount::Savings(_) => Err(OperationError::NotACheckingAccount(number)),
                }
            }
            OperationKind::DisplayInfo => {
                let account = self.account_mut(&number)?;
                Ok(Some(account.display_info()))
            }
        }
    }

    /// Runs the branch loop, applying operations from the receiver until the
    /// sender side closes. Failures are reported and never abort the loop.
    pub async fn run(&mut self) {
        while let Some(operation) = self.receiver.recv().await {
            match self.apply(operation) {
                Ok(Some(message)) => println!("{message}"),
                Ok(None) => {}
                Err(e) => eprintln!("{e}"),
            }
        }
    }
}

/// Errors that can occur while applying an operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    #[error("No account with number {0}")]
    AccountNotFound(String),
    #[error("Account {0} already exists")]
    AccountAlreadyExists(String),
    #[error("Operation is missing the '{0}' field")]
    MissingField(&'static str),
    #[error("Account {0} is not a savings account")]
    NotASavingsAccount(String),
    #[error("Account {0} is not a checking account")]
    NotACheckingAccount(String),
    #[error("{0}")]
    Withdraw(#[from] WithdrawError),
    #[error("{0}")]
    Deposit(#[from] DepositError),
}
