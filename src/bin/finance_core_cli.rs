//! Demo entry point: records the sample transactions and prints the
//! balance, the expense breakdown, and the per-month summary.

use rust_decimal::Decimal;

use finance_core::errors::Result;
use finance_core::ledger::{parse_date, CategoryTaxonomy, Ledger, TransactionKind};
use finance_core::report::{format_usd, ExpenseBreakdown};
use finance_core::storage::JsonStorage;

fn main() {
    finance_core::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let store = JsonStorage::new_default()?;
    let mut ledger = Ledger::open(CategoryTaxonomy::default(), Box::new(store))?;

    for (amount, category, kind, date) in [
        (5000, "Salary", TransactionKind::Income, "2024-01-15"),
        (1500, "Rent", TransactionKind::Expense, "2024-01-20"),
        (300, "Food", TransactionKind::Expense, "2024-01-25"),
        (200, "Transportation", TransactionKind::Expense, "2024-01-28"),
    ] {
        let date = parse_date(date)?;
        ledger.add_transaction(Decimal::from(amount), category, kind, Some(date))?;
    }

    println!("Current Balance: {}", format_usd(ledger.balance()));

    let report = ledger.expense_report();
    match ExpenseBreakdown::new(&report).render() {
        Some(chart) => print!("\n{chart}"),
        None => println!("No expense data to visualize."),
    }

    for (month, totals) in ledger.monthly_summary() {
        println!("\nMonth: {month}");
        println!("Income: {}", format_usd(totals.income));
        println!("Expenses: {}", format_usd(totals.expenses));
        println!("Net: {}", format_usd(totals.net()));
    }
    Ok(())
}
