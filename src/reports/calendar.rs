//! Calendar Report
//!
//! Lays out the daily status of every day in a month as a week grid.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::cycle::{CycleLedger, DailyStatus, DayStatus};
use crate::display::DisplayFormat;
use crate::error::{CycleError, CycleResult};
use crate::models::period::month_bounds;
use crate::models::{BudgetPeriod, Money};
use crate::storage::Storage;

const CELL_WIDTH: usize = 10;

/// Month grid of daily statuses
#[derive(Debug, Clone)]
pub struct CalendarReport {
    pub year: i32,
    pub month: u32,
    pub period_name: String,
    pub week_start: Weekday,
    /// Rows of seven cells; `None` pads days outside the month
    pub weeks: Vec<[Option<DailyStatus>; 7]>,
}

/// Glyph shown next to a day number
pub fn status_glyph(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Success => "✓",
        DayStatus::Warning => "!",
        DayStatus::Danger => "✗",
        DayStatus::Neutral => "·",
    }
}

/// Days between `week_start` and `day` going forward, 0..=6
fn column_of(day: Weekday, week_start: Weekday) -> usize {
    let day = day.num_days_from_monday() as usize;
    let start = week_start.num_days_from_monday() as usize;
    (day + 7 - start) % 7
}

impl CalendarReport {
    /// Generate the grid for one month of `period`
    pub fn generate(
        storage: &Storage,
        period: &BudgetPeriod,
        year: i32,
        month: u32,
        today: NaiveDate,
        week_start: Weekday,
    ) -> CycleResult<Self> {
        let (first, last) = month_bounds(year, month).ok_or_else(|| {
            CycleError::Validation(format!("Invalid month {:04}-{:02}", year, month))
        })?;

        let transactions = storage.transactions.get_all()?;
        let ledger = CycleLedger::new(period, &transactions)?;

        let mut weeks = Vec::new();
        let mut row: [Option<DailyStatus>; 7] = Default::default();

        for day in first.iter_days().take_while(|d| *d <= last) {
            let col = column_of(day.weekday(), week_start);
            if col == 0 && day != first {
                weeks.push(std::mem::take(&mut row));
            }
            row[col] = Some(ledger.status_for(day, today));
        }
        weeks.push(row);

        Ok(Self {
            year,
            month,
            period_name: period.name.clone(),
            week_start,
            weeks,
        })
    }

    pub fn days(&self) -> impl Iterator<Item = &DailyStatus> {
        self.weeks.iter().flatten().flatten()
    }

    /// Number of days with the given status
    pub fn count(&self, status: DayStatus) -> usize {
        self.days().filter(|d| d.status == status).count()
    }

    /// Sum of every day's spend in the month
    pub fn total_spent(&self) -> Money {
        self.days().map(|d| d.spent).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &DisplayFormat) -> String {
        let mut output = String::new();
        let width = CELL_WIDTH * 7;

        let title = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default();
        output.push_str(&format!("{}  ({})\n", title, self.period_name));
        output.push_str(&"=".repeat(width));
        output.push('\n');

        let mut weekday = self.week_start;
        for _ in 0..7 {
            output.push_str(&format!("{:<CELL_WIDTH$}", weekday.to_string()));
            weekday = weekday.succ();
        }
        output.push('\n');
        output.push_str(&"-".repeat(width));
        output.push('\n');

        for week in &self.weeks {
            let mut numbers = String::new();
            let mut spends = String::new();

            for cell in week {
                match cell {
                    Some(day) => {
                        let label = format!("{:>2} {}", day.date.day(), status_glyph(day.status));
                        numbers.push_str(&format!("{:<CELL_WIDTH$}", label));
                        let spend = if day.spent.is_zero() {
                            String::new()
                        } else {
                            day.spent.to_string()
                        };
                        spends.push_str(&format!("{:<CELL_WIDTH$}", spend));
                    }
                    None => {
                        numbers.push_str(&" ".repeat(CELL_WIDTH));
                        spends.push_str(&" ".repeat(CELL_WIDTH));
                    }
                }
            }

            output.push_str(numbers.trim_end());
            output.push('\n');
            output.push_str(spends.trim_end());
            output.push('\n');
        }

        output.push_str(&"-".repeat(width));
        output.push('\n');
        output.push_str(&format!(
            "✓ {} within limit   ! {} over   ✗ {} well over   Spent: {}\n",
            self.count(DayStatus::Success),
            self.count(DayStatus::Warning),
            self.count(DayStatus::Danger),
            fmt.money(self.total_spent()),
        ));

        output
    }
}
