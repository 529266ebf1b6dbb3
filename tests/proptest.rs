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

//! Property-based tests for the ledger.
//!
//! These tests verify invariants that should hold for any sequence of
//! deposits and withdrawals, valid or not.

use bank_ledger::{
    Account, AccountId, CheckingPolicy, Registry, RegistryError, TaxId, Transaction,
    TransactionError, TransactionKind,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Arbitrary Strategies
// =============================================================================

/// Generate a positive amount (0.01 to 1000.00).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generate any amount, including zero and negatives.
fn arb_any_amount() -> impl Strategy<Value = Decimal> {
    (-10_000i64..=100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    prop_oneof![
        arb_any_amount().prop_map(Transaction::deposit),
        arb_any_amount().prop_map(Transaction::withdrawal),
    ]
}

fn checking_account() -> Account {
    Account::checking(AccountId(1), TaxId::from("1"), CheckingPolicy::default())
}

// =============================================================================
// Account Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Balance always equals deposits minus withdrawals recorded in the history.
    #[test]
    fn balance_matches_history(
        transactions in prop::collection::vec(arb_transaction(), 0..30),
    ) {
        let mut account = checking_account();
        for tx in &transactions {
            let _ = tx.apply(&mut account);
        }

        let history = account.history();
        let expected = history.total_of(TransactionKind::Deposit)
            - history.total_of(TransactionKind::Withdrawal);
        prop_assert_eq!(account.balance(), expected);
        prop_assert!(account.balance() >= Decimal::ZERO);
    }

    /// Withdrawal count never exceeds the policy maximum.
    #[test]
    fn withdrawal_count_bounded(
        transactions in prop::collection::vec(arb_transaction(), 0..30),
        max_withdrawals in 0usize..6,
    ) {
        let policy = CheckingPolicy::new(CheckingPolicy::DEFAULT_WITHDRAWAL_LIMIT, max_withdrawals);
        let mut account = Account::checking(AccountId(1), TaxId::from("1"), policy);
        for tx in &transactions {
            let _ = tx.apply(&mut account);
        }

        prop_assert!(account.history().count_of(TransactionKind::Withdrawal) <= max_withdrawals);
    }

    /// Every recorded amount is positive.
    #[test]
    fn recorded_amounts_positive(
        transactions in prop::collection::vec(arb_transaction(), 0..30),
    ) {
        let mut account = checking_account();
        for tx in &transactions {
            let _ = tx.apply(&mut account);
        }

        prop_assert!(account.history().all().iter().all(|r| r.amount() > Decimal::ZERO));
    }

    /// A failed transaction leaves balance and history untouched.
    #[test]
    fn failure_changes_nothing(
        transactions in prop::collection::vec(arb_transaction(), 0..30),
    ) {
        let mut account = checking_account();
        for tx in &transactions {
            let balance = account.balance();
            let records = account.history().len();
            match tx.apply(&mut account) {
                Ok(()) => prop_assert_eq!(account.history().len(), records + 1),
                Err(_) => {
                    prop_assert_eq!(account.balance(), balance);
                    prop_assert_eq!(account.history().len(), records);
                }
            }
        }
    }
}

// =============================================================================
// Error Precedence Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Non-positive deposits are always rejected.
    #[test]
    fn non_positive_deposit_rejected(cents in -100_000i64..=0) {
        let mut account = checking_account();
        let result = Transaction::deposit(Decimal::new(cents, 2)).apply(&mut account);

        prop_assert_eq!(result, Err(TransactionError::InvalidAmount));
        prop_assert!(account.history().is_empty());
    }

    /// Amounts above the ceiling fail with LimitExceeded whatever the balance.
    #[test]
    fn above_limit_always_limit_exceeded(
        balance in arb_amount(),
        excess in arb_amount(),
    ) {
        let mut account = checking_account();
        Transaction::deposit(balance).apply(&mut account).unwrap();

        let amount = CheckingPolicy::DEFAULT_WITHDRAWAL_LIMIT + excess;
        let result = Transaction::withdrawal(amount).apply(&mut account);
        prop_assert_eq!(result, Err(TransactionError::LimitExceeded));
        prop_assert_eq!(account.balance(), balance);
    }

    /// Withdrawing more than the balance (within the ceiling) is InsufficientFunds.
    #[test]
    fn above_balance_insufficient_funds(balance in 1i64..=40_000, gap in 1i64..=10_000) {
        let mut account = checking_account();
        let balance = Decimal::new(balance, 2);
        Transaction::deposit(balance).apply(&mut account).unwrap();

        let result = Transaction::withdrawal(balance + Decimal::new(gap, 2)).apply(&mut account);
        prop_assert_eq!(result, Err(TransactionError::InsufficientFunds));
        prop_assert_eq!(account.balance(), balance);
    }
}

// =============================================================================
// Registry Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Tax ids stay unique whatever sequence of registrations is attempted.
    #[test]
    fn tax_ids_unique(ids in prop::collection::vec(0u8..10, 1..30)) {
        let mut registry = Registry::new();
        for id in &ids {
            let result = registry
                .create_customer(TaxId::new(id.to_string()), "Name", "01/01/2000", "Street")
                .map(|_| ());
            if let Err(e) = result {
                prop_assert_eq!(e, RegistryError::DuplicateTaxId);
            }
        }

        let mut distinct = ids.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(registry.customers().len(), distinct.len());
    }

    /// Account numbers are 1..=n in opening order.
    #[test]
    fn account_numbers_sequential(owners in prop::collection::vec(0u8..4, 1..20)) {
        let mut registry = Registry::new();
        for id in 0u8..4 {
            registry
                .create_customer(TaxId::new(id.to_string()), "Name", "01/01/2000", "Street")
                .unwrap();
        }
        for owner in &owners {
            registry.create_checking_account(&TaxId::new(owner.to_string())).unwrap();
        }

        for (i, account) in registry.accounts().iter().enumerate() {
            prop_assert_eq!(account.id(), AccountId(i + 1));
        }
    }
}
