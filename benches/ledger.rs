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

//! Benchmarks for the ledger.
//!
//! Run with: cargo bench

use bank_ledger::{Account, AccountId, CheckingPolicy, Registry, TaxId, Transaction};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

fn unlimited_account() -> Account {
    let policy = CheckingPolicy::new(Decimal::MAX, usize::MAX);
    Account::checking(AccountId(1), TaxId::from("1"), policy)
}

fn bench_single_deposit(c: &mut Criterion) {
    c.bench_function("single_deposit", |b| {
        b.iter(|| {
            let mut account = unlimited_account();
            Transaction::deposit(Decimal::new(10000, 2))
                .apply(black_box(&mut account))
                .unwrap();
        })
    });
}

fn bench_mixed_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_transactions");

    for count in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64 * 2));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let mut account = unlimited_account();
                for _ in 0..count {
                    Transaction::deposit(Decimal::new(10000, 2))
                        .apply(&mut account)
                        .unwrap();
                    Transaction::withdrawal(Decimal::new(5000, 2))
                        .apply(&mut account)
                        .unwrap();
                }
                black_box(&account);
            })
        });
    }
    group.finish();
}

fn bench_customer_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("customer_lookup");

    for count in [10, 100, 1_000].iter() {
        let mut registry = Registry::new();
        for i in 0..*count {
            let tax_id = TaxId::new(i.to_string());
            registry
                .create_customer(tax_id.clone(), "Name", "01/01/2000", "Street")
                .unwrap();
            registry.create_checking_account(&tax_id).unwrap();
        }
        let last = TaxId::new((count - 1).to_string());

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                let _ = registry.deposit(black_box(&last), Decimal::ONE);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_deposit,
    bench_mixed_transactions,
    bench_customer_lookup,
);
criterion_main!(benches);
