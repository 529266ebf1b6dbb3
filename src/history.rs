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

//! Per-account transaction history.
//!
//! A [`HistoryLog`] is append-only: records are added in the order the
//! operations completed and are never edited or removed.

use rust_decimal::Decimal;
use std::fmt;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]-[month]-[year] [hour]:[minute]:[second]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => f.write_str("Deposit"),
            Self::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// One completed deposit or withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: OffsetDateTime,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Decimal, timestamp: OffsetDateTime) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    /// Builds a record stamped with the current time.
    ///
    /// Uses the local offset when it can be determined, UTC otherwise.
    pub fn now(kind: TransactionKind, amount: Decimal) -> Self {
        let timestamp = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::new(kind, amount, timestamp)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Timestamp as `DD-MM-YYYY HH:MM:SS`.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp
            .format(TIMESTAMP_FORMAT)
            .unwrap_or_else(|_| self.timestamp.to_string())
    }
}

/// Chronological log of the transactions applied to one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    records: Vec<TransactionRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record at the end of the log.
    ///
    /// No validation happens here: only records for operations that already
    /// succeeded may be appended.
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Sum of the amounts of every record of the given kind.
    pub fn total_of(&self, kind: TransactionKind) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.amount)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
