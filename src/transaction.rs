// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Transaction dispatch.
//!
//! A [`Transaction`] is a command carrying an amount. Applying it runs the
//! matching account operation and, only when that succeeds, appends a
//! [`TransactionRecord`](crate::TransactionRecord) to the account's history.

use crate::account::Account;
use crate::history::TransactionKind;
use crate::TransactionError;
use rust_decimal::Decimal;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Decimal },
    Withdrawal { amount: Decimal },
}

impl Transaction {
    pub fn deposit(amount: Decimal) -> Self {
        Self::Deposit { amount }
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Self::Withdrawal { amount }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Self::Deposit { amount } | Self::Withdrawal { amount } => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Deposit { .. } => TransactionKind::Deposit,
            Self::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }

    /// Applies the transaction to `account`.
    ///
    /// On failure neither the balance nor the history changes and the reason
    /// is handed back to the caller.
    pub fn apply(&self, account: &mut Account) -> Result<(), TransactionError> {
        let amount = self.amount();
        let outcome = match self {
            Self::Deposit { .. } => account.deposit(amount),
            Self::Withdrawal { .. } => account.withdraw(amount),
        };

        match outcome {
            Ok(()) => {
                account.record(self.kind(), amount);
                debug!(account = %account.id(), kind = %self.kind(), %amount, "transaction applied");
                Ok(())
            }
            Err(e) => {
                debug!(account = %account.id(), kind = %self.kind(), %amount, error = %e, "transaction rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountId, CheckingPolicy, TaxId};
    use rust_decimal_macros::dec;

    fn checking() -> Account {
        Account::checking(AccountId(1), TaxId::from("1"), CheckingPolicy::default())
    }

    #[test]
    fn deposit_appends_record() {
        let mut account = checking();
        Transaction::deposit(dec!(250)).apply(&mut account).unwrap();

        assert_eq!(account.balance(), dec!(250));
        let records = account.history().all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind(), TransactionKind::Deposit);
        assert_eq!(records[0].amount(), dec!(250));
    }

    #[test]
    fn failed_withdrawal_appends_nothing() {
        let mut account = checking();
        Transaction::deposit(dec!(100)).apply(&mut account).unwrap();

        let result = Transaction::withdrawal(dec!(101)).apply(&mut account);
        assert_eq!(result, Err(TransactionError::InsufficientFunds));
        assert_eq!(account.balance(), dec!(100));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn failed_deposit_appends_nothing() {
        let mut account = checking();
        let result = Transaction::deposit(Decimal::ZERO).apply(&mut account);
        assert_eq!(result, Err(TransactionError::InvalidAmount));
        assert!(account.history().is_empty());
    }

    #[test]
    fn fourth_withdrawal_is_refused() {
        let mut account = checking();
        Transaction::deposit(dec!(1000)).apply(&mut account).unwrap();
        for _ in 0..3 {
            Transaction::withdrawal(dec!(100)).apply(&mut account).unwrap();
        }

        let result = Transaction::withdrawal(dec!(100)).apply(&mut account);
        assert_eq!(result, Err(TransactionError::WithdrawalCountExceeded));
        assert_eq!(account.balance(), dec!(700));
        assert_eq!(account.history().count_of(TransactionKind::Withdrawal), 3);
    }

    #[test]
    fn accessors() {
        let tx = Transaction::withdrawal(dec!(12.5));
        assert_eq!(tx.amount(), dec!(12.5));
        assert_eq!(tx.kind(), TransactionKind::Withdrawal);
    }
}
