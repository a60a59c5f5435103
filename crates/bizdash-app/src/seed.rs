//! Demo records used when `seed_demo_data` is enabled

use bizdash_core::prelude::*;
use bizdash_core::{
    BudgetLine, Category, Decimal, Project, ProjectStatus, Report, ReportFrequency, ReportKind,
    ReportStatus, Task, TaskPriority, Transaction, TransactionKind, TransactionStatus,
};
use chrono::{Duration, NaiveDate};

use crate::repository::{InMemoryRepository, Repositories};

fn days_ago(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days)
}

fn money(units: i64) -> Decimal {
    Decimal::new(units, 0)
}

/// Demo transactions, oldest first
pub fn demo_transactions(today: NaiveDate) -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};
    use TransactionStatus::{Cancelled, Completed, Pending};

    vec![
        Transaction::new(Income, Category::Sales, "Client payment - Acme Corp", money(15000), Completed, days_ago(today, 14)),
        Transaction::new(Expense, Category::Office, "Office rent", money(3500), Completed, days_ago(today, 12)),
        Transaction::new(Expense, Category::Software, "Annual software licenses", money(8500), Pending, days_ago(today, 9)),
        Transaction::new(Income, Category::Consulting, "Consulting retainer - Globex", money(6200), Completed, days_ago(today, 6)),
        Transaction::new(Expense, Category::Marketing, "Q3 ad campaign", money(4800), Completed, days_ago(today, 4)),
        Transaction::new(Expense, Category::Travel, "Conference travel", money(1250), Cancelled, days_ago(today, 2)),
        Transaction::new(Income, Category::Sales, "Invoice 1042 - Initech", money(9800), Pending, days_ago(today, 1)),
    ]
}

/// Demo budget allocations
pub fn demo_budgets() -> Vec<BudgetLine> {
    vec![
        BudgetLine::new(Category::Marketing, money(10000), money(9500)),
        BudgetLine::new(Category::Software, money(12000), money(8500)),
        BudgetLine::new(Category::Office, money(5000), money(3500)),
        BudgetLine::new(Category::Travel, money(4000), money(1250)),
        BudgetLine::new(Category::Payroll, money(60000), money(36000)),
    ]
}

/// Demo reports, oldest first
pub fn demo_reports(today: NaiveDate) -> Vec<Report> {
    let report = |name: &str, kind, frequency, status, age| Report {
        status,
        ..Report::requested(name, kind, frequency, days_ago(today, age))
    };

    vec![
        report("Monthly P&L", ReportKind::Financial, ReportFrequency::Monthly, ReportStatus::Ready, 30),
        report("Sales pipeline", ReportKind::Sales, ReportFrequency::Weekly, ReportStatus::Ready, 7),
        report("Headcount summary", ReportKind::Hr, ReportFrequency::Quarterly, ReportStatus::Failed, 3),
        report("Team productivity", ReportKind::Productivity, ReportFrequency::Weekly, ReportStatus::Generating, 0),
    ]
}

/// Demo projects, oldest first
pub fn demo_projects(today: NaiveDate) -> Vec<Project> {
    let mut erp = Project::new("ERP migration", "Move accounting to the new ERP");
    erp.status = ProjectStatus::Active;
    erp.due = Some(days_ago(today, 5));

    let mut website = Project::new("Website relaunch", "New marketing site and blog");
    website.status = ProjectStatus::Active;
    website.due = Some(days_ago(today, -20));

    vec![erp, website]
}

/// Demo tasks, oldest first
pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task::new("Reconcile March invoices", "Dana", TaskPriority::High),
        Task::new("Draft Q3 budget", "Sam", TaskPriority::Medium),
        Task::new("Review vendor contracts", "Alex", TaskPriority::Low),
    ]
}

/// In-memory repositories populated with the demo records
pub fn demo_repositories(today: NaiveDate) -> Result<Repositories> {
    Ok(Repositories {
        transactions: Box::new(InMemoryRepository::seeded(demo_transactions(today))?),
        reports: Box::new(InMemoryRepository::seeded(demo_reports(today))?),
        projects: Box::new(InMemoryRepository::seeded(demo_projects(today))?),
        tasks: Box::new(InMemoryRepository::seeded(demo_tasks())?),
    })
}
