//! Checking accounts: overdraft protection and a fixed per-withdrawal fee.
use crate::bank::{
    Account, AccountBase, Notice, TransactionKind, WithdrawError,
    types::{Money, money_to_f64},
};

/// Fee charged alongside every successful withdrawal.
pub const TRANSACTION_FEE: Money = 15_000; // $1.50

/// A checking account. The balance may go negative, but a withdrawal is
/// rejected if it alone would push the balance below `-overdraft_limit`.
/// The fee is deducted on top and is not limit-checked on its own.
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    base: AccountBase,
    /// Fixed at construction. See [`CheckingAccount::set_overdraft_limit`].
    overdraft_limit: Money,
}

impl CheckingAccount {
    /// Opens a new checking account.
    pub fn new(
        account_number: impl Into<String>,
        customer_name: impl Into<String>,
        initial_balance: Money,
        overdraft_limit: Money,
    ) -> Self {
        CheckingAccount {
            base: AccountBase::new(account_number, customer_name, initial_balance),
            overdraft_limit,
        }
    }

    /// Gets the overdraft limit.
    pub fn overdraft_limit(&self) -> Money {
        self.overdraft_limit
    }

    /// Records an overdraft limit change request. The stored limit is
    /// immutable after construction, so only an `OVERDRAFT_LIMIT_CHANGE` log
    /// entry is appended; [`CheckingAccount::overdraft_limit`] keeps
    /// returning the original value. Callers must not assume the limit
    /// actually changed.
    pub fn set_overdraft_limit(&mut self, new_limit: Money) -> Notice {
        self.base
            .log_transaction(TransactionKind::OverdraftLimitChange, new_limit);
        Notice::OverdraftLimitChangeRequested { limit: new_limit }
    }
}

impl Account for CheckingAccount {
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
        if self.base.balance() - amount < -self.overdraft_limit {
            return Err(WithdrawError::OverdraftLimitExceeded(money_to_f64(
                self.overdraft_limit,
            )));
        }

        // Amount and fee come off in a single mutation, then log both.
        self.base
            .set_balance(self.base.balance() - amount - TRANSACTION_FEE);
        self.base.log_transaction(TransactionKind::Withdrawal, amount);
        self.base.log_transaction(TransactionKind::Fee, TRANSACTION_FEE);

        if self.base.balance() < 0 {
            return Ok(Some(Notice::Overdrawn {
                balance: self.base.balance(),
            }));
        }
        Ok(None)
    }

    fn display_info(&self) -> String {
        format!(
            "{}\nAccount Type: Checking Account\nOverdraft Limit: ${:.2}\nTransaction Fee: ${:.2}",
            self.base.display_info(),
            money_to_f64(self.overdraft_limit),
            money_to_f64(TRANSACTION_FEE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::LogEntry;

    /// balance $100.00, overdraft limit $50.00
    fn account() -> CheckingAccount {
        CheckingAccount::new("CHK-001", "Jane Doe", 1_000_000, 500_000)
    }

    #[test]
    fn test_withdraw_non_positive() {
        let mut account = account();
        for amount in [0, -10_000] {
            assert!(matches!(
                account.withdraw(amount),
                Err(WithdrawError::NonPositiveAmount)
            ));
        }
        assert_eq!(account.balance(), 1_000_000);
        assert!(account.base().transactions().is_empty());
    }

    #[test]
    fn test_withdraw_deducts_amount_and_fee() {
        let mut account = account();
        assert!(matches!(account.withdraw(400_000), Ok(None)));
        // 100.00 - 40.00 - 1.50
        assert_eq!(account.balance(), 585_000);
        assert_eq!(
            account.base().transactions(),
            &[
                LogEntry {
                    kind: TransactionKind::Withdrawal,
                    amount: 400_000
                },
                LogEntry {
                    kind: TransactionKind::Fee,
                    amount: TRANSACTION_FEE
                },
            ]
        );
    }

    #[test]
    fn test_withdraw_into_overdraft_warns() {
        let mut account = account();
        // 100.00 - 140.00 - 1.50 = -41.50, still above -50.00
        let notice = account.withdraw(1_400_000).unwrap();
        assert_eq!(account.balance(), -415_000);
        assert_eq!(notice, Some(Notice::Overdrawn { balance: -415_000 }));
    }

    #[test]
    fn test_withdraw_beyond_overdraft_limit() {
        let mut account = account();
        // 100.00 - 160.00 = -60.00, below -50.00
        assert!(matches!(
            account.withdraw(1_600_000),
            Err(WithdrawError::OverdraftLimitExceeded(limit)) if limit == 50.0
        ));
        assert_eq!(account.balance(), 1_000_000);
        assert!(account.base().transactions().is_empty());
    }

    #[test]
    fn test_fee_is_not_limit_checked() {
        let mut account = account();
        // 100.00 - 150.00 = -50.00 is exactly the limit, so the withdrawal
        // passes; the fee then takes the balance past it.
        assert!(account.withdraw(1_500_000).is_ok());
        assert_eq!(account.balance(), -515_000);
    }

    #[test]
    fn test_set_overdraft_limit_is_audit_only() {
        let mut account = account();
        let notice = account.set_overdraft_limit(750_000);
        assert_eq!(account.overdraft_limit(), 500_000);
        assert_eq!(
            notice,
            Notice::OverdraftLimitChangeRequested { limit: 750_000 }
        );
        assert_eq!(
            account.base().transactions(),
            &[LogEntry {
                kind: TransactionKind::OverdraftLimitChange,
                amount: 750_000
            }]
        );
    }

    #[test]
    fn test_display_info() {
        let account = account();
        assert_eq!(
            account.display_info(),
            "Account Number: CHK-001\n\
             Account Holder: Jane Doe\n\
             Balance: $100.00\n\
             Account Type: Checking Account\n\
             Overdraft Limit: $50.00\n\
             Transaction Fee: $1.50"
        );
    }
}
