pub mod amortization;
pub mod classify;
pub mod status;

pub use amortization::{AmortizationSchedule, InstallmentEntry, LoanTerms};
pub use classify::{
    can_pay_now, classify, classify_now, DueClassification, DueSoonInstallment,
    OverdueInstallment,
};
pub use status::LoanStatus;
