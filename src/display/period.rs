//! Budget period display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::DisplayFormat;
use crate::models::{BudgetPeriod, PeriodId};

#[derive(Tabled)]
struct PeriodRow {
    #[tabled(rename = "")]
    active: &'static str,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Fixed")]
    fixed: String,
    #[tabled(rename = "Net Budget")]
    net: String,
}

/// Format periods as a table, marking the active one with `*`
pub fn format_period_list(
    periods: &[BudgetPeriod],
    active_id: Option<PeriodId>,
    fmt: &DisplayFormat,
) -> String {
    if periods.is_empty() {
        return "No budget periods found.".to_string();
    }

    let rows = periods.iter().map(|p| PeriodRow {
        active: if Some(p.id) == active_id { "*" } else { "" },
        id: p.id.to_string(),
        name: p.name.clone(),
        start: fmt.date(p.start_date),
        end: fmt.date(p.end_date),
        days: p.length_days(),
        income: fmt.money(p.monthly_income),
        fixed: fmt.money(p.fixed_expenses),
        net: fmt.money(p.net_budget()),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(6..9), Alignment::right());
    table.to_string()
}

pub fn format_period_details(
    period: &BudgetPeriod,
    is_active: bool,
    fmt: &DisplayFormat,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Period:      {}", period.name));
    if is_active {
        output.push_str(" (active)");
    }
    output.push('\n');
    output.push_str(&format!("ID:          {}\n", period.id));
    output.push_str(&format!(
        "Dates:       {} to {} ({} days)\n",
        fmt.date(period.start_date),
        fmt.date(period.end_date),
        period.length_days()
    ));
    output.push_str(&format!("Income:      {}\n", fmt.money(period.monthly_income)));
    output.push_str(&format!("Fixed:       {}\n", fmt.money(period.fixed_expenses)));
    output.push_str(&format!("Net budget:  {}\n", fmt.money(period.net_budget())));

    output
}
