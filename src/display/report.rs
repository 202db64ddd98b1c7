//! Formatting for calculator output: dashboard stats, day detail and history.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::transaction::format_transaction_list;
use super::DisplayFormat;
use crate::audit::AuditEntry;
use crate::cycle::{CycleStats, DayStatus};
use crate::models::Money;
use crate::reports::{status_glyph, DayReport, HistoryReport};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn status_label(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Success => "within limit",
        DayStatus::Warning => "over limit",
        DayStatus::Danger => "well over limit",
        DayStatus::Neutral => "not judged",
    }
}

/// Dashboard view of the cycle statistics
pub fn format_stats(period_name: &str, stats: &CycleStats, fmt: &DisplayFormat) -> String {
    let money = |m: Money| fmt.money(m);
    let mut output = String::new();

    output.push_str(&format!(
        "{}: {} to {} (as of {})\n",
        period_name,
        fmt.date(stats.cycle_start_date),
        fmt.date(stats.cycle_end_date),
        fmt.date(stats.as_of)
    ));
    output.push_str(&"=".repeat(56));
    output.push('\n');

    output.push_str(&format!("Daily limit:        {:>20}\n", money(stats.daily_limit)));
    output.push_str(&format!("Days remaining:     {:>20}\n", stats.days_remaining));
    output.push_str(&format!(
        "Left at day start:  {:>20}\n",
        money(stats.budget_at_start_of_day)
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');
    output.push_str(&format!("Total income:       {:>20}\n", money(stats.total_income)));
    output.push_str(&format!("Total expense:      {:>20}\n", money(stats.total_expense)));
    output.push_str(&format!("Balance:            {:>20}\n", money(stats.balance)));
    output.push_str(&format!(
        "Disposable income:  {:>20}\n",
        money(stats.disposable_income)
    ));
    output.push_str(&format!("Spent before today: {:>20}\n", money(stats.spent_before)));

    let used = stats.spent_before.percent_of(stats.disposable_income);
    output.push_str(&format!(
        "\n{} {} of disposable income used\n",
        format_bar(used, 100.0, 30),
        format_percentage(used)
    ));

    if stats.daily_limit.is_negative() {
        output.push_str("\nThis cycle is overspent.\n");
    }

    output
}

/// Detail view of one day
pub fn format_day(report: &DayReport, fmt: &DisplayFormat) -> String {
    let status = &report.status;
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}, {}  {}  ({})\n",
        status_glyph(status.status),
        status.date.format("%A"),
        fmt.date(status.date),
        status_label(status.status),
        report.period_name
    ));

    output.push_str(&format!("Spent:      {}\n", fmt.money(status.spent)));
    match status.limit {
        Some(limit) => output.push_str(&format!("Limit:      {}\n", fmt.money(limit))),
        None => output.push_str("Limit:      outside the period\n"),
    }
    if let Some(remaining) = status.remaining_in_cycle {
        output.push_str(&format!("Left after: {}\n", fmt.money(remaining)));
    }

    output.push('\n');
    output.push_str(&format_transaction_list(&report.transactions, fmt));
    output.push('\n');
    output
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Period")]
    name: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Saved")]
    savings_rate: String,
}

/// History table with a totals line
pub fn format_history(report: &HistoryReport, fmt: &DisplayFormat) -> String {
    if report.cycles.is_empty() {
        return "No budget periods found.".to_string();
    }

    let rows = report.cycles.iter().map(|c| HistoryRow {
        name: c.name.clone(),
        start: fmt.date(c.start_date),
        end: fmt.date(c.end_date),
        income: fmt.money(c.total_income),
        expense: fmt.money(c.total_expense),
        balance: fmt.money(c.balance),
        savings_rate: format_percentage(c.savings_rate),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(3..7), Alignment::right());

    let mut output = format!(
        "{}\nAll cycles: balance {} of {} income ({} saved)",
        table,
        fmt.money(report.total_balance),
        fmt.money(report.total_income),
        format_percentage(report.overall_savings_rate())
    );
    if let Some(best) = report.best_cycle() {
        output.push_str(&format!(
            "\nBest cycle: {} ({})",
            best.name,
            format_percentage(best.savings_rate)
        ));
    }
    output
}

/// Audit entries, oldest first, one block per entry
pub fn format_audit_log(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries found.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}
