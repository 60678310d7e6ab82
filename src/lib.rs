pub mod account;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod reporting;
pub mod schedule;
pub mod serialization;
pub mod split;
pub mod types;

// re-export key types
pub use account::{VehicleLoan, VehicleSummary};
pub use config::{DueWindow, SplitRates};
pub use decimal::{Money, Rate};
pub use errors::{FleetError, Result};
pub use events::{Event, EventStore};
pub use reporting::{period_financials, ExpenseRecord, RentCollection, ReportingPeriod};
pub use schedule::{
    can_pay_now, classify, classify_now, AmortizationSchedule, DueClassification,
    DueSoonInstallment, InstallmentEntry, LoanStatus, LoanTerms, OverdueInstallment,
};
pub use serialization::{InstallmentView, LoanView, TermsView};
pub use split::{compute_split, FinancialSplit, PeriodFinancials};
pub use types::{ExpenseCategory, OwnershipType, ScheduleHealth, VehicleId};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
