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

//! # Bank Ledger
//!
//! An in-memory bank ledger: customers, checking accounts, deposits,
//! withdrawals and statements. All state lives in a [`Registry`] value owned
//! by the caller and is gone when it is dropped.
//!
//! ## Core Components
//!
//! - [`Registry`]: Owner of all customers and accounts of a session
//! - [`Account`]: Balance plus history, with optional [`CheckingPolicy`] limits
//! - [`HistoryLog`]: Append-only list of [`TransactionRecord`]s
//! - [`Transaction`]: Deposit/withdrawal command applied to an account
//! - [`TransactionError`], [`RegistryError`]: Failure reasons
//!
//! ## Example
//!
//! ```
//! use bank_ledger::{Registry, TaxId, TransactionError, RegistryError};
//! use rust_decimal_macros::dec;
//!
//! let mut registry = Registry::new();
//! let tax_id = TaxId::from("12345678900");
//! registry
//!     .create_customer(tax_id.clone(), "Ana Souza", "01/02/1990", "Rua A, 10")
//!     .unwrap();
//! registry.create_checking_account(&tax_id).unwrap();
//!
//! registry.deposit(&tax_id, dec!(1000)).unwrap();
//! registry.withdraw(&tax_id, dec!(200)).unwrap();
//! assert_eq!(
//!     registry.withdraw(&tax_id, dec!(600)),
//!     Err(RegistryError::Transaction(TransactionError::LimitExceeded))
//! );
//!
//! let statement = registry.statement(&tax_id).unwrap();
//! assert_eq!(statement.balance, dec!(800));
//! assert_eq!(statement.records.len(), 2);
//! ```

pub mod account;
mod base;
mod customer;
pub mod error;
mod history;
mod registry;
mod transaction;

pub use account::{Account, AccountKind, CheckingPolicy, Statement};
pub use base::{AccountId, BRANCH_CODE, TaxId};
pub use customer::{Customer, Person};
pub use error::{RegistryError, TransactionError};
pub use history::{HistoryLog, TransactionKind, TransactionRecord};
pub use registry::Registry;
pub use transaction::Transaction;
