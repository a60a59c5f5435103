//! Custom widget components

mod budget;
mod cards;
mod command_palette;
mod dashboard;
mod filter_bar;
mod finance;
mod form_modal;
mod header;
pub mod modal_overlay;
mod placeholder;
mod projects;
mod reports;
mod status_bar;
mod tabs;

pub use budget::BudgetGauge;
pub use cards::StatCard;
pub use command_palette::CommandPalette;
pub use dashboard::DashboardPanel;
pub use filter_bar::FilterBar;
pub use finance::FinancePanel;
pub use form_modal::FormModal;
pub use header::MainHeader;
pub use placeholder::Placeholder;
pub use projects::ProjectsPanel;
pub use reports::ReportsPanel;
pub use status_bar::StatusBar;
pub use tabs::{TabStrip, ViewNav};
