pub mod billing;
pub mod cost;
pub mod quote;
pub mod rollup;
pub mod schedule;

pub use billing::{BillingSummary, Invoice, Payment, INVOICE_STATUS_RECEIVED, PAYMENT_STATUS_PAID};
pub use cost::{CategoryAmount, CostBreakdown, CostCategory, CostItem};
pub use quote::{BudgetLine, Item, QuoteRecord, Sheet, DEFAULT_BUDGET_CATEGORY};
pub use rollup::{DerivedFinancials, PortfolioSummary, ProjectInput, ProjectRollup};
pub use schedule::{BarPosition, GanttBar, ProgressBand, ScheduleEntry};
