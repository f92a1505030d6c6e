//! Savings accounts: interest accrual and a minimum balance floor.
use crate::bank::{
    Account, AccountBase, Notice, TransactionKind, WithdrawError,
    types::{Money, money_from_f64, money_to_f64},
};

/// Floor the balance may never drop below after a withdrawal.
pub const MIN_BALANCE: Money = 1_000_000; // $100.00

/// A savings account. Withdrawals that would leave the balance under
/// [`MIN_BALANCE`] are rejected; interest accrues on the current balance.
#[derive(Debug, Clone)]
pub struct SavingsAccount {
    base: AccountBase,
    /// Percent per period, e.g. 2.5 for 2.5%.
    interest_rate: f64,
}

impl SavingsAccount {
    /// Opens a new savings account.
    pub fn new(
        account_number: impl Into<String>,
        customer_name: impl Into<String>,
        initial_balance: Money,
        interest_rate: f64,
    ) -> Self {
        SavingsAccount {
            base: AccountBase::new(account_number, customer_name, initial_balance),
            interest_rate,
        }
    }

    /// Gets the interest rate in percent.
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Computes the interest one period would earn on the current balance.
    /// Pure, no side effects.
    pub fn calculate_interest(&self) -> Money {
        money_from_f64(money_to_f64(self.base.balance()) * (self.interest_rate / 100.0))
    }

    /// Credits one period of interest to the balance and logs an `INTEREST`
    /// entry. Calling this twice compounds.
    pub fn apply_interest(&mut self) -> Notice {
        let interest = self.calculate_interest();
        self.base.set_balance(self.base.balance() + interest);
        self.base.log_transaction(TransactionKind::Interest, interest);
        Notice::InterestApplied { amount: interest }
    }
}

impl Account for SavingsAccount {
    fn base(&self) -> &AccountBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AccountBase {
        &mut self.base
    }

    fn withdraw(&mut self, amount: Money) -> Result<Option<Notice>, WithdrawError> {
        if amount <= 0 {
            return Err(WithdrawError::NonPositiveAmount);
        }
        if self.base.balance() - amount < MIN_BALANCE {
            return Err(WithdrawError::BelowMinimumBalance(money_to_f64(MIN_BALANCE)));
        }

        self.base.set_balance(self.base.balance() - amount);
        self.base.log_transaction(TransactionKind::Withdrawal, amount);
        Ok(None)
    }

    fn display_info(&self) -> String {
        format!(
            "{}\nAccount Type: Savings Account\nInterest Rate: {}%\nMinimum Balance Requirement: ${:.2}",
            self.base.display_info(),
            self.interest_rate,
            money_to_f64(MIN_BALANCE),
        )
    }
}
