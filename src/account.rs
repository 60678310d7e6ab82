use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::config::{DueWindow, SplitRates};
use crate::errors::{FleetError, Result};
use crate::events::{Event, EventStore};
use crate::reporting::{period_financials, ExpenseRecord, RentCollection, ReportingPeriod};
use crate::schedule::{can_pay_now, classify, AmortizationSchedule, DueClassification, LoanStatus, LoanTerms};
use crate::split::{compute_split, FinancialSplit};
use crate::types::{ScheduleHealth, VehicleId};

/// loan account for one financed vehicle
pub struct VehicleLoan {
    pub vehicle_id: VehicleId,
    pub schedule: AmortizationSchedule,
    pub due_window: DueWindow,
    pub events: EventStore,
}

impl VehicleLoan {
    /// generate the schedule and open the account
    pub fn originate(
        vehicle_id: VehicleId,
        terms: LoanTerms,
        time_provider: &SafeTimeProvider,
    ) -> Result<Self> {
        let schedule = AmortizationSchedule::generate(vehicle_id, terms)?;
        let mut events = EventStore::new();

        events.emit(Event::ScheduleGenerated {
            vehicle_id,
            principal: schedule.terms.principal,
            installment_count: schedule.entries.len() as u32,
            timestamp: time_provider.now(),
        });

        if schedule.short_closed() {
            events.emit(Event::ScheduleShortClosed {
                vehicle_id,
                months_emitted: schedule.entries.len() as u32,
                tenure_months: schedule.terms.tenure_months,
            });
        }

        if let ScheduleHealth::UnamortizedBalance { remaining } = schedule.health() {
            events.emit(Event::UnamortizedBalanceDetected {
                vehicle_id,
                remaining,
            });
        }

        Ok(Self {
            vehicle_id,
            schedule,
            due_window: DueWindow::default(),
            events,
        })
    }

    /// settle the oldest unpaid installment with today's date
    ///
    /// payments always settle the earliest unpaid installment; its window
    /// must be open (within grace days of due, or already overdue).
    pub fn record_payment(&mut self, time_provider: &SafeTimeProvider) -> Result<u32> {
        let today = time_provider.now().date_naive();

        let next = self
            .schedule
            .entries
            .iter()
            .find(|e| !e.is_paid)
            .cloned()
            .ok_or(FleetError::LoanSettled)?;

        if !can_pay_now(&next, today, self.due_window) {
            let days_until_due = (next.due_date - today).num_days();
            return Err(FleetError::PaymentOutsideWindow {
                month: next.month,
                due_date: next.due_date,
                days_until_due,
            });
        }

        self.schedule.mark_paid(next.month, today)?;

        self.events.emit(Event::InstallmentPaid {
            vehicle_id: self.vehicle_id,
            month: next.month,
            amount: next.amount_due(),
            paid_date: today,
            timestamp: time_provider.now(),
        });

        if self.schedule.is_settled() {
            self.events.emit(Event::LoanSettled {
                vehicle_id: self.vehicle_id,
                total_paid: self.schedule.status().total_paid_to_date,
                timestamp: time_provider.now(),
            });
        }

        Ok(next.month)
    }

    /// current loan status, derived fresh
    pub fn status(&self) -> LoanStatus {
        self.schedule.status()
    }

    /// overdue and due-soon installments as of the given day
    pub fn classify_due(&self, today: NaiveDate) -> DueClassification {
        classify(&self.schedule, today, self.due_window)
    }

    /// loan status plus the period's profit split, for dashboard display
    pub fn summary(
        &self,
        rents: &[RentCollection],
        expenses: &[ExpenseRecord],
        period: ReportingPeriod,
        rates: &SplitRates,
    ) -> Result<VehicleSummary> {
        let period_fin = period_financials(self.vehicle_id, rents, expenses, period, rates);
        let split = compute_split(&period_fin)?;
        Ok(VehicleSummary {
            status: self.status(),
            split,
        })
    }

    /// get accumulated events
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}

/// combined display summary for one vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub status: LoanStatus,
    pub split: FinancialSplit,
}
