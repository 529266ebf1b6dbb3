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

//! Customer and account registry.
//!
//! The [`Registry`] is the single owner of every customer and account of a
//! session. It enforces the invariants that span customers:
//!
//! - No two customers share a tax id.
//! - Account numbers are assigned sequentially, starting at 1, in the order
//!   the accounts are opened.
//!
//! Deposits and withdrawals are addressed by tax id and always run against
//! the customer's first account.

use crate::account::{Account, CheckingPolicy, Statement};
use crate::base::{AccountId, TaxId};
use crate::customer::{Customer, Person};
use crate::transaction::Transaction;
use crate::RegistryError;
use rust_decimal::Decimal;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    customers: Vec<Customer>,
    /// Every account, indexed by `AccountId - 1`.
    accounts: Vec<Account>,
    /// Policy given to newly opened checking accounts.
    policy: CheckingPolicy,
}

impl Registry {
    /// Creates an empty registry using the default checking policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CheckingPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> CheckingPolicy {
        self.policy
    }

    /// Registers a new person customer.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateTaxId`] if a customer with `tax_id` exists.
    pub fn create_customer(
        &mut self,
        tax_id: TaxId,
        full_name: impl Into<String>,
        birth_date: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<&Customer, RegistryError> {
        if self.find_customer(&tax_id).is_some() {
            return Err(RegistryError::DuplicateTaxId);
        }

        info!(%tax_id, "customer created");
        let person = Person {
            tax_id,
            full_name: full_name.into(),
            birth_date: birth_date.into(),
        };
        let index = self.customers.len();
        self.customers.push(Customer::new(person, address));
        Ok(&self.customers[index])
    }

    /// Opens a checking account for the customer holding `tax_id`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::CustomerNotFound`] if no such customer exists.
    pub fn create_checking_account(&mut self, tax_id: &TaxId) -> Result<&Account, RegistryError> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.tax_id() == tax_id)
            .ok_or(RegistryError::CustomerNotFound)?;

        let id = AccountId(self.accounts.len() + 1);
        customer.add_account(id);
        self.accounts
            .push(Account::checking(id, tax_id.clone(), self.policy));

        info!(account = %id, %tax_id, "checking account opened");
        Ok(&self.accounts[id.index()])
    }

    pub fn find_customer(&self, tax_id: &TaxId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.tax_id() == tax_id)
    }

    pub fn first_account_of(&self, customer: &Customer) -> Option<&Account> {
        customer.first_account().and_then(|id| self.account(id))
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id.index()).filter(|a| a.id() == id)
    }

    /// Customer referenced by the account's owner tax id.
    pub fn holder_of(&self, account: &Account) -> Option<&Customer> {
        self.find_customer(account.owner())
    }

    /// All customers in registration order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All accounts in opening order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn deposit(&mut self, tax_id: &TaxId, amount: Decimal) -> Result<(), RegistryError> {
        self.dispatch(tax_id, Transaction::deposit(amount))
    }

    pub fn withdraw(&mut self, tax_id: &TaxId, amount: Decimal) -> Result<(), RegistryError> {
        self.dispatch(tax_id, Transaction::withdrawal(amount))
    }

    /// Runs `transaction` through the customer against their first account.
    fn dispatch(&mut self, tax_id: &TaxId, transaction: Transaction) -> Result<(), RegistryError> {
        let customer = self
            .customers
            .iter()
            .find(|c| c.tax_id() == tax_id)
            .ok_or(RegistryError::CustomerNotFound)?;
        let account = customer
            .first_account()
            .and_then(|id| self.accounts.get_mut(id.index()))
            .ok_or(RegistryError::NoAccountForCustomer)?;

        customer.initiate(account, &transaction)?;
        Ok(())
    }

    /// Statement of the first account of the customer holding `tax_id`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::CustomerNotFound`] - unknown tax id.
    /// - [`RegistryError::NoAccountForCustomer`] - customer has no account yet.
    pub fn statement(&self, tax_id: &TaxId) -> Result<Statement<'_>, RegistryError> {
        let customer = self
            .find_customer(tax_id)
            .ok_or(RegistryError::CustomerNotFound)?;
        let account = self
            .first_account_of(customer)
            .ok_or(RegistryError::NoAccountForCustomer)?;
        Ok(account.statement())
    }
}
