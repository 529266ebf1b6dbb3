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

//! Account management.
//!
//! An [`Account`] holds a balance and the [`HistoryLog`] of the transactions
//! applied to it. Checking accounts add a [`CheckingPolicy`] that is enforced
//! before the shared balance checks of every withdrawal:
//!
//! ```text
//! withdraw ──► per-withdrawal limit ──► withdrawal count ──► amount > 0 ──► balance
//!              (checking only)          (checking only)
//! ```
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use bank_ledger::{Account, AccountId, TaxId};
//!
//! let mut account = Account::new(AccountId(1), TaxId::from("123"));
//! account.deposit(dec!(10.00)).unwrap();
//! assert_eq!(account.balance(), dec!(10.00));
//! ```

use crate::TransactionError;
use crate::base::{AccountId, BRANCH_CODE, TaxId};
use crate::history::{HistoryLog, TransactionKind, TransactionRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Withdrawal rules of a checking account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    /// Largest amount a single withdrawal may take out.
    pub withdrawal_limit: Decimal,
    /// Number of withdrawals allowed over the account's lifetime.
    pub max_withdrawals: usize,
}

impl CheckingPolicy {
    pub const DEFAULT_WITHDRAWAL_LIMIT: Decimal = dec!(500);
    pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;

    pub fn new(withdrawal_limit: Decimal, max_withdrawals: usize) -> Self {
        Self {
            withdrawal_limit,
            max_withdrawals,
        }
    }

    fn check_withdrawal(
        &self,
        amount: Decimal,
        withdrawals_so_far: usize,
    ) -> Result<(), TransactionError> {
        if amount > self.withdrawal_limit {
            return Err(TransactionError::LimitExceeded);
        }
        if withdrawals_so_far >= self.max_withdrawals {
            return Err(TransactionError::WithdrawalCountExceeded);
        }
        Ok(())
    }
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WITHDRAWAL_LIMIT,
            Self::DEFAULT_MAX_WITHDRAWALS,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Only the balance checks apply.
    Basic,
    Checking(CheckingPolicy),
}

/// Ledger account.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    /// Holder of the account, resolved through the registry.
    owner: TaxId,
    balance: Decimal,
    history: HistoryLog,
    kind: AccountKind,
}

impl Account {
    pub fn new(id: AccountId, owner: TaxId) -> Self {
        Self::with_kind(id, owner, AccountKind::Basic)
    }

    pub fn checking(id: AccountId, owner: TaxId, policy: CheckingPolicy) -> Self {
        Self::with_kind(id, owner, AccountKind::Checking(policy))
    }

    fn with_kind(id: AccountId, owner: TaxId, kind: AccountKind) -> Self {
        Self {
            id,
            owner,
            balance: Decimal::ZERO,
            history: HistoryLog::new(),
            kind,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn branch_code(&self) -> &'static str {
        BRANCH_CODE
    }

    pub fn owner(&self) -> &TaxId {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub(crate) fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        self.history.append(TransactionRecord::now(kind, amount));
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: balance went negative: {}",
            self.balance
        );
    }

    /// Increases the balance.
    ///
    /// Does not touch the history; see [`Transaction::apply`](crate::Transaction::apply).
    ///
    /// # Errors
    ///
    /// - [`TransactionError::InvalidAmount`] - amount is zero or negative.
    /// - [`TransactionError::AmountOverflow`] - new balance would exceed [`Decimal::MAX`].
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TransactionError::AmountOverflow)?;
        self.assert_invariants();
        Ok(())
    }

    /// Decreases the balance.
    ///
    /// # Errors
    ///
    /// Checked in this order, the first failing check wins:
    ///
    /// - [`TransactionError::LimitExceeded`] - checking account, amount above the ceiling.
    /// - [`TransactionError::WithdrawalCountExceeded`] - checking account, no withdrawals left.
    /// - [`TransactionError::InvalidAmount`] - amount is zero or negative.
    /// - [`TransactionError::InsufficientFunds`] - amount above the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        if let AccountKind::Checking(policy) = &self.kind {
            let withdrawals = self.history.count_of(TransactionKind::Withdrawal);
            policy.check_withdrawal(amount, withdrawals)?;
        }
        self.debit(amount)
    }

    fn debit(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(TransactionError::InsufficientFunds);
        }
        self.balance -= amount;
        self.assert_invariants();
        Ok(())
    }

    pub fn statement(&self) -> Statement<'_> {
        Statement {
            records: self.history.all(),
            balance: self.balance,
        }
    }
}

/// Snapshot of an account's history together with its current balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    pub records: &'a [TransactionRecord],
    pub balance: Decimal,
}
