use anyhow::Result;
use chrono::{Days, Local, NaiveDate};

use crate::commands::list::print_todos;
use crate::store::TodoStore;

/// Length of the `weekly` window past today.
const WEEK_DAYS: u64 = 7;

/// Execute the `daily` command: todos due today.
pub fn run_daily(store: &TodoStore) -> Result<()> {
    let (start, end) = daily_range(today());
    print_todos(&store.filter_by_due_range(start, end));
    Ok(())
}

/// Execute the `weekly` command: todos due from today through a week out.
pub fn run_weekly(store: &TodoStore) -> Result<()> {
    let (start, end) = weekly_range(today());
    print_todos(&store.filter_by_due_range(start, end));
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn daily_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today)
}

fn weekly_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today.checked_add_days(Days::new(WEEK_DAYS)).unwrap_or(NaiveDate::MAX);
    (today, end)
}
