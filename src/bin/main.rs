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

use bank_ledger::{CheckingPolicy, Registry, Statement, TaxId};
use clap::Parser;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::process;
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Bank Ledger - Interactive in-memory banking menu
///
/// Creates customers and checking accounts, and runs deposits, withdrawals
/// and statements against them. Nothing is kept after the program exits.
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "An interactive, in-memory bank ledger", long_about = None)]
struct Args {
    /// Pause after each action, in milliseconds (0 disables it)
    #[arg(long, value_name = "MS", default_value_t = 2000)]
    pause_ms: u64,

    /// Largest single withdrawal allowed on new checking accounts
    #[arg(long, value_name = "AMOUNT", default_value_t = CheckingPolicy::DEFAULT_WITHDRAWAL_LIMIT)]
    withdrawal_limit: Decimal,

    /// Number of withdrawals allowed on new checking accounts
    #[arg(long, value_name = "N", default_value_t = CheckingPolicy::DEFAULT_MAX_WITHDRAWALS)]
    max_withdrawals: usize,
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let mut registry = Registry::with_policy(CheckingPolicy::new(
        args.withdrawal_limit,
        args.max_withdrawals,
    ));
    let policy = registry.policy();
    info!(
        withdrawal_limit = %policy.withdrawal_limit,
        max_withdrawals = policy.max_withdrawals,
        pause_ms = args.pause_ms,
        "starting session"
    );
    let pause = Duration::from_millis(args.pause_ms);

    let stdin = io::stdin();
    if let Err(e) = run(&mut registry, stdin.lock(), io::stdout(), pause) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so they never interleave with the menu.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(filter),
        )
        .init();
}

const MENU: &str = "
=== Menu ===
[1] - Deposit
[2] - Withdraw
[3] - Statement
[4] - New account
[5] - List accounts
[6] - New customer
[7] - Quit
========================
=> ";

/// Runs the menu loop until the operator quits or input ends.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` end the loop early. Every ledger
/// failure is reported on `output` and the menu is shown again.
fn run<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: R,
    output: W,
    pause: Duration,
) -> io::Result<()> {
    let mut menu = Menu {
        input,
        output,
        pause,
    };

    loop {
        let Some(choice) = menu.prompt(MENU)? else {
            break;
        };
        match choice.as_str() {
            "1" => menu.deposit(registry)?,
            "2" => menu.withdraw(registry)?,
            "3" => menu.statement(registry)?,
            "4" => menu.new_account(registry)?,
            "5" => menu.list_accounts(registry)?,
            "6" => menu.new_customer(registry)?,
            "7" => {
                writeln!(menu.output, "\nThank you for using our banking system!")?;
                break;
            }
            _ => {
                writeln!(menu.output, "\nInvalid option.")?;
                menu.wait()?;
            }
        }
    }

    menu.output.flush()
}

struct Menu<R, W> {
    input: R,
    output: W,
    pause: Duration,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Prints `label` and reads one trimmed line.
    ///
    /// Returns `None` once input is exhausted; later calls keep returning
    /// `None`, so the main loop ends at its next prompt.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_amount(&mut self, label: &str) -> io::Result<Option<Decimal>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match parse_amount(&raw) {
            Some(amount) => Ok(Some(amount)),
            None => {
                self.report("\nOperation failed: the amount entered is not a number.")?;
                Ok(None)
            }
        }
    }

    /// Asks for a tax id and checks that a customer holds it.
    fn prompt_customer(&mut self, registry: &Registry, label: &str) -> io::Result<Option<TaxId>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        let tax_id = TaxId::from(raw);
        if registry.find_customer(&tax_id).is_none() {
            self.report("Customer not found.")?;
            return Ok(None);
        }
        Ok(Some(tax_id))
    }

    fn report(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.wait()
    }

    fn wait(&mut self) -> io::Result<()> {
        if !self.pause.is_zero() {
            self.output.flush()?;
            thread::sleep(self.pause);
        }
        Ok(())
    }

    fn deposit(&mut self, registry: &mut Registry) -> io::Result<()> {
        let Some(tax_id) = self.prompt_customer(registry, "Tax id: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Deposit amount: ")? else {
            return Ok(());
        };
        match registry.deposit(&tax_id, amount) {
            Ok(()) => self.report("\nDeposit completed."),
            Err(e) => self.report(&format!("\nOperation failed: {}.", e)),
        }
    }

    fn withdraw(&mut self, registry: &mut Registry) -> io::Result<()> {
        let Some(tax_id) = self.prompt_customer(registry, "Tax id: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Withdrawal amount: ")? else {
            return Ok(());
        };
        match registry.withdraw(&tax_id, amount) {
            Ok(()) => self.report("\nWithdrawal completed."),
            Err(e) => self.report(&format!("\nOperation failed: {}.", e)),
        }
    }

    fn statement(&mut self, registry: &Registry) -> io::Result<()> {
        let Some(tax_id) = self.prompt_customer(registry, "Tax id: ")? else {
            return Ok(());
        };
        match registry.statement(&tax_id) {
            Ok(statement) => write_statement(&mut self.output, &statement),
            Err(e) => self.report(&format!("Operation failed: {}.", e)),
        }
    }

    fn new_account(&mut self, registry: &mut Registry) -> io::Result<()> {
        let Some(raw) = self.prompt("Customer tax id (digits only): ")? else {
            return Ok(());
        };
        match registry.create_checking_account(&TaxId::from(raw)) {
            Ok(account) => {
                let message = format!("Account {} created.", account.id());
                self.report(&message)
            }
            Err(e) => self.report(&format!("Operation failed: {}.", e)),
        }
    }

    fn list_accounts(&mut self, registry: &Registry) -> io::Result<()> {
        if registry.accounts().is_empty() {
            return self.report("No accounts registered.");
        }
        for account in registry.accounts() {
            let holder = registry
                .holder_of(account)
                .map(|c| c.full_name())
                .unwrap_or("-");
            writeln!(self.output, "{}", "=".repeat(40))?;
            writeln!(self.output, "Branch: {}", account.branch_code())?;
            writeln!(self.output, "Account: {}", account.id())?;
            writeln!(self.output, "Holder: {}", holder)?;
        }
        self.wait()
    }

    fn new_customer(&mut self, registry: &mut Registry) -> io::Result<()> {
        let Some(raw) = self.prompt("Tax id (digits only): ")? else {
            return Ok(());
        };
        let tax_id = TaxId::from(raw);
        if registry.find_customer(&tax_id).is_some() {
            return self.report("A customer with this tax id already exists!");
        }

        let Some(full_name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd/mm/yyyy): ")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address (street, number - district - city/state): ")?
        else {
            return Ok(());
        };

        match registry.create_customer(tax_id, full_name, birth_date, address) {
            Ok(_) => self.report("Customer created."),
            Err(e) => self.report(&format!("Operation failed: {}.", e)),
        }
    }
}

/// Parses operator input, accepting a comma as the decimal separator.
fn parse_amount(raw: &str) -> Option<Decimal> {
    raw.trim().replace(',', ".").parse().ok()
}

fn write_statement<W: Write>(output: &mut W, statement: &Statement<'_>) -> io::Result<()> {
    writeln!(output, "{} STATEMENT {}", "=".repeat(20), "=".repeat(20))?;
    if statement.records.is_empty() {
        writeln!(output, "No transactions recorded.")?;
    } else {
        for record in statement.records {
            writeln!(
                output,
                "{}: R$ {:.2} at {}",
                record.kind(),
                record.amount().round_dp(2),
                record.formatted_timestamp()
            )?;
        }
    }
    writeln!(
        output,
        "\nCurrent balance: R$ {:.2}",
        statement.balance.round_dp(2)
    )?;
    writeln!(output, "{}", "=".repeat(50))
}
