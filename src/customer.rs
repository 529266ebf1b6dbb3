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

//! Bank customers.

use crate::account::Account;
use crate::base::{AccountId, TaxId};
use crate::transaction::Transaction;
use crate::TransactionError;

/// Identity of a natural-person customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub tax_id: TaxId,
    pub full_name: String,
    /// Free-form, as typed by the operator.
    pub birth_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    person: Person,
    address: String,
    /// Accounts held by this customer, in opening order.
    accounts: Vec<AccountId>,
}

impl Customer {
    pub fn new(person: Person, address: impl Into<String>) -> Self {
        Self {
            person,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.person.tax_id
    }

    pub fn full_name(&self) -> &str {
        &self.person.full_name
    }

    pub fn birth_date(&self) -> &str {
        &self.person.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }

    pub fn first_account(&self) -> Option<AccountId> {
        self.accounts.first().copied()
    }

    pub fn add_account(&mut self, account: AccountId) {
        self.accounts.push(account);
    }

    /// Runs `transaction` against `account` on behalf of this customer.
    ///
    /// Ownership of `account` is not checked.
    pub fn initiate(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), TransactionError> {
        transaction.apply(account)
    }
}
