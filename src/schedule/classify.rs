use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use super::amortization::{AmortizationSchedule, InstallmentEntry};
use crate::config::DueWindow;
use crate::decimal::Money;

/// unpaid installment past its due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueInstallment {
    pub month: u32,
    pub due_date: NaiveDate,
    pub amount_due: Money,
    pub days_past_due: u32,
}

/// unpaid installment inside the payment window ahead of its due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueSoonInstallment {
    pub month: u32,
    pub due_date: NaiveDate,
    pub amount_due: Money,
    pub days_until_due: u32,
}

/// unpaid installments labelled against a reference date
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DueClassification {
    pub overdue: Vec<OverdueInstallment>,
    pub due_soon: Vec<DueSoonInstallment>,
}

impl DueClassification {
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.due_soon.is_empty()
    }
}

/// label each unpaid installment as overdue or due soon
///
/// labels only; settling order and any mutation belong to the account layer.
pub fn classify(
    schedule: &AmortizationSchedule,
    today: NaiveDate,
    window: DueWindow,
) -> DueClassification {
    let mut classification = DueClassification::default();

    for entry in schedule.entries.iter().filter(|e| !e.is_paid) {
        let days_until_due = (entry.due_date - today).num_days();
        if days_until_due < 0 {
            classification.overdue.push(OverdueInstallment {
                month: entry.month,
                due_date: entry.due_date,
                amount_due: entry.amount_due(),
                days_past_due: (-days_until_due) as u32,
            });
        } else if days_until_due <= i64::from(window.grace_days_before_due) {
            classification.due_soon.push(DueSoonInstallment {
                month: entry.month,
                due_date: entry.due_date,
                amount_due: entry.amount_due(),
                days_until_due: days_until_due as u32,
            });
        }
    }

    classification
}

/// classify against the provider's current date
pub fn classify_now(
    schedule: &AmortizationSchedule,
    time_provider: &SafeTimeProvider,
    window: DueWindow,
) -> DueClassification {
    classify(schedule, time_provider.now().date_naive(), window)
}

/// whether an installment may be settled on the given day
///
/// the window opens `grace_days_before_due` days ahead of the due date and
/// stays open indefinitely once the installment is overdue.
pub fn can_pay_now(entry: &InstallmentEntry, today: NaiveDate, window: DueWindow) -> bool {
    let days_until_due = (entry.due_date - today).num_days();
    days_until_due <= i64::from(window.grace_days_before_due)
}
