//! Terminal rendering of the expense breakdown, plus currency formatting
//! for the CLI.

use std::collections::BTreeMap;
use std::fmt::Write;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const BAR_WIDTH: usize = 40;

/// Renders an expense report as a per-category percentage bar chart.
///
/// Consumes the mapping produced by `Ledger::expense_report`; an empty
/// mapping is a no-render case, never an error.
pub struct ExpenseBreakdown<'a> {
    report: &'a BTreeMap<String, Decimal>,
}

impl<'a> ExpenseBreakdown<'a> {
    pub fn new(report: &'a BTreeMap<String, Decimal>) -> Self {
        Self { report }
    }

    /// Returns `None` when there is nothing to draw.
    pub fn render(&self) -> Option<String> {
        let total: Decimal = self.report.values().copied().sum();
        if self.report.is_empty() || total.is_zero() {
            return None;
        }
        let name_width = self
            .report
            .keys()
            .map(|name| name.len())
            .max()
            .unwrap_or(0);
        let mut out = String::from("Expense Breakdown\n");
        for (category, amount) in self.report {
            let share = amount / total;
            let filled = (share * Decimal::from(BAR_WIDTH as u64))
                .round()
                .to_usize()
                .unwrap_or(0)
                .min(BAR_WIDTH);
            let percent = (share * Decimal::ONE_HUNDRED).round_dp(1);
            let _ = writeln!(
                out,
                "{category:<name_width$}  {:<bar_width$}  {percent:>5}%  {}",
                "#".repeat(filled),
                format_usd(*amount),
                bar_width = BAR_WIDTH,
            );
        }
        Some(out)
    }
}

/// Currency formatting used by the CLI: `$` prefix, two decimal places.
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
