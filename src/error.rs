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

//! Error types for account operations and registry lookups.

use thiserror::Error;

/// Failures of a single deposit or withdrawal against an account.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// Amount is zero or negative
    #[error("invalid amount (must be positive)")]
    InvalidAmount,

    /// Withdrawal would exceed the current balance
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Withdrawal is larger than the account's per-transaction ceiling
    #[error("amount exceeds the per-withdrawal limit")]
    LimitExceeded,

    /// Account already reached its maximum number of withdrawals
    #[error("maximum number of withdrawals reached")]
    WithdrawalCountExceeded,

    /// Deposit would take the balance past the largest representable amount
    #[error("deposit would overflow the balance")]
    AmountOverflow,
}

/// Failures of registry-level operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Another customer already holds this tax id
    #[error("a customer with this tax id already exists")]
    DuplicateTaxId,

    /// No customer is registered under the given tax id
    #[error("customer not found")]
    CustomerNotFound,

    /// Customer exists but has no account
    #[error("customer has no account")]
    NoAccountForCustomer,

    /// The account rejected the transaction
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
